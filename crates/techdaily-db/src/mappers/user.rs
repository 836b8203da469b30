//! User entity <- model mapper

use techdaily_core::entities::User;
use techdaily_core::value_objects::UserId;

use crate::models::UserModel;

/// Convert UserModel to User entity
impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            id: UserId::new(model.user_id),
            is_administrator: model.is_administrator(),
            nickname: model.nickname,
        }
    }
}
