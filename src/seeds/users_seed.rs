use crate::models::User;

/// Os 2 usuários presentes no start do processo
pub fn default_users() -> Vec<User> {
    vec![
        User {
            id: 1,
            name: Some("John Doe".into()),
            email: Some("john@example.com".into()),
        },
        User {
            id: 2,
            name: Some("Jane Smith".into()),
            email: Some("jane@example.com".into()),
        },
    ]
}
