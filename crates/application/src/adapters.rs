//! Conversion contracts between domain objects and their representations.
//!
//! A representation is anything outside the domain, such as a persistence
//! record or a request body. Adapters convert in one or both directions.
//! A missing input is always an [`AppError::Internal`]; how other failures are
//! reported depends on where the representation came from.

use common::{AppError, AppResult};

/// Domain object to representation.
pub trait Converter<D, R>: Send + Sync {
    fn convert(&self, domain: &D) -> AppResult<R>;

    /// Convert a value that may be missing. A missing value is an error.
    fn convert_optional(&self, domain: Option<&D>) -> AppResult<R> {
        match domain {
            Some(domain) => self.convert(domain),
            None => Err(AppError::internal(format!(
                "no {} supplied for conversion",
                short_type_name::<D>()
            ))),
        }
    }

    /// Convert every item, keeping the input order.
    fn convert_all(&self, domains: &[D]) -> AppResult<Vec<R>> {
        domains.iter().map(|domain| self.convert(domain)).collect()
    }
}

/// Representation back to domain object.
pub trait Restorer<D, R>: Send + Sync {
    fn restore(&self, target: &R) -> AppResult<D>;

    /// Restore a value that may be missing. A missing value is an error.
    fn restore_optional(&self, target: Option<&R>) -> AppResult<D> {
        match target {
            Some(target) => self.restore(target),
            None => Err(AppError::internal(format!(
                "no {} supplied for restoration",
                short_type_name::<R>()
            ))),
        }
    }

    /// Restore every item, keeping the input order.
    fn restore_all(&self, targets: &[R]) -> AppResult<Vec<D>> {
        targets.iter().map(|target| self.restore(target)).collect()
    }
}

fn short_type_name<T>() -> &'static str {
    let name = std::any::type_name::<T>();
    name.rsplit("::").next().unwrap_or(name)
}
