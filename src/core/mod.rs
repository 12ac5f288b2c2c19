pub mod db;
pub mod logging;
pub mod sqlx_utils;
#[cfg(test)]
pub mod test_utils;
pub mod utils;
pub mod validation;
