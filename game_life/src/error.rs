use thiserror::Error;

use life_core::LifeError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Life(#[from] LifeError),

    #[error("failed to start the tick runtime: {0}")]
    Runtime(#[from] std::io::Error),

    #[error(transparent)]
    Window(#[from] eframe::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn runtime_error_keeps_source() {
        let io = std::io::Error::other("no threads");
        let err = AppError::from(io);
        assert!(err.source().is_some());
        assert_eq!(err.to_string(), "failed to start the tick runtime: no threads");
    }

    #[test]
    fn window_errors_convert_without_losing_source() {
        fn converts<E: Into<AppError> + std::error::Error + 'static>() {}
        converts::<eframe::Error>();
    }
}
