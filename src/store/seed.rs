//! Demo records loaded at startup.

use crate::store::user::User;

/// The five records the service starts with unless seeding is disabled.
pub fn demo_users() -> Vec<User> {
    vec![
        User::new("john@hotmail.com", "+318457447", "011235813"),
        User::new("jane@gmail.com", "+319677758", "11010010"),
        User::new("richard81@gmail.com", "+3598983650", "24688642"),
        User::new("alexander@abv.bg", "+3598874255", "RK35_mS!"),
        User::new("oliver@kangaroo.au", "+6145770931", "Oka936Rt"),
    ]
}
