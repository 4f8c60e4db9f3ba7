use crate::app::prefs::PrefsError;
use crate::cube::TopologyError;
use crate::snake;
use std::{
    error::Error,
    fmt,
    fmt::{Debug, Display, Formatter},
};

#[derive(Debug)]
pub enum AppErrorType {
    Prefs(PrefsError),
    Topology(TopologyError),
    SnakeBuilderError(snake::BuilderError),
}

/// The second member contains a trace in reverse order
#[must_use]
pub struct AppError(AppErrorType, Vec<String>);

impl From<PrefsError> for AppError {
    fn from(e: PrefsError) -> Self {
        Self(AppErrorType::Prefs(e), vec![])
    }
}

impl From<TopologyError> for AppError {
    fn from(e: TopologyError) -> Self {
        Self(AppErrorType::Topology(e), vec![])
    }
}

impl From<snake::BuilderError> for AppError {
    fn from(e: snake::BuilderError) -> Self {
        Self(AppErrorType::SnakeBuilderError(e), vec![])
    }
}

impl AppError {
    pub fn with_trace_step<S: ToString>(mut self, s: S) -> Self {
        self.1.push(s.to_string());
        self
    }

    pub fn error_type(&self) -> &AppErrorType {
        &self.0
    }
}

impl Debug for AppError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Error:\n{:?}\nTrace:", self.0)?;
        for t in (self.1).iter().rev() {
            writeln!(f, " in {}", t)?;
        }
        Ok(())
    }
}

impl Display for AppError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Debug::fmt(self, f)
    }
}

impl Error for AppError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match &self.0 {
            AppErrorType::Prefs(e) => Some(e),
            AppErrorType::Topology(e) => Some(e),
            AppErrorType::SnakeBuilderError(e) => Some(e),
        }
    }
}

pub type AppResult<T = ()> = Result<T, AppError>;

pub trait AppErrorConversion {
    fn with_trace_step<S: ToString>(self, s: S) -> Self;
}

impl<T> AppErrorConversion for AppResult<T> {
    fn with_trace_step<S: ToString>(self, s: S) -> Self {
        self.map_err(|e| e.with_trace_step(s.to_string()))
    }
}
