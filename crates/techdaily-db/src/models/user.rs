//! User database model

use sqlx::FromRow;

/// `admin_status` value marking an administrator
pub const ADMIN_STATUS: i16 = 1;

/// Database model for users table
#[derive(Debug, Clone, FromRow)]
pub struct UserModel {
    pub user_id: i64,
    pub nickname: String,
    pub admin_status: i16,
}

impl UserModel {
    #[inline]
    pub fn is_administrator(&self) -> bool {
        self.admin_status == ADMIN_STATUS
    }
}
