//! Menu resource source (port)

use async_trait::async_trait;

use crate::domain::RawMenuRecord;
use crate::error::MenuError;

/// Single opaque "fetch menu resources" call. Implementations must return an
/// error on transport or server failure instead of silently returning
/// malformed data.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MenuRepository: Send + Sync {
    async fn fetch_raw_menus(&self) -> Result<Vec<RawMenuRecord>, MenuError>;
}
