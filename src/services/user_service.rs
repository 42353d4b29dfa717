use crate::{
    models::{CreateUserRequest, User},
    store::UserStore,
    utils::AppError,
};

pub fn list_users(store: &UserStore) -> Vec<User> {
    store.all()
}

/// Busca linear por id
pub fn get_user(store: &UserStore, id: u64) -> Result<User, AppError> {
    store
        .find(id)
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))
}

/// Sem validação: campos ausentes ficam `None`
pub fn create_user(store: &UserStore, request: CreateUserRequest) -> User {
    store.insert(request.name, request.email)
}
