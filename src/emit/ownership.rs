//! Ownership policies: the single home of strategy-dependent renderings.
//!
//! Every rendering that depends on [`OwnershipStrategy`] goes through an [`OwnershipPolicy`]:
//! - handle types for records and arrays,
//! - array literal construction,
//! - casts to record types.
//!
//! Adding a strategy means adding one policy type here; emission code never branches on the strategy itself.
//!
//! ## Examples
//!
//! ```text
//!                    record handle            array literal                         record cast
//! raw                foo_t*                   new std::vector<T>{...}               static_cast<foo_t*>(x)
//! unique-and-raw     foo_t*                   std::unique_ptr<V>(new V{...})        static_cast<foo_t*>(x)
//! shared             std::shared_ptr<foo_t>   (unsupported)                         std::static_pointer_cast<foo_t>(x)
//! ```

use super::config::OwnershipStrategy;
use super::errors::EmitError;

/// Strategy-dependent renderings for records and arrays.
pub trait OwnershipPolicy: Send + Sync {
    fn strategy(&self) -> OwnershipStrategy;

    /// Non-owning handle type for a record class.
    fn record_handle(&self, class: &str) -> String;

    /// Non-owning handle type for a `std::vector<...>` type.
    fn array_handle(&self, vector: &str) -> String;

    /// Expression constructing a new array of type `vector` holding `elements` (already comma-joined).
    ///
    /// Constructions use a brace initializer list and require C++11.
    fn construct_array(&self, vector: &str, elements: &str) -> Result<String, EmitError>;

    /// Expression casting `value` to a handle of record `class`.
    fn cast_to_record(&self, class: &str, value: &str) -> String;
}

/// Plain pointers everywhere.
#[derive(Debug, Clone, Copy, Default)]
pub struct RawPointers;

/// Owning `std::unique_ptr`, borrowed plain pointers.
#[derive(Debug, Clone, Copy, Default)]
pub struct UniqueAndRawPointers;

/// `std::shared_ptr` everywhere.
#[derive(Debug, Clone, Copy, Default)]
pub struct SharedPointers;

fn static_cast(target: &str, value: &str) -> String {
    format!("static_cast<{target}>({value})")
}

impl OwnershipPolicy for RawPointers {
    fn strategy(&self) -> OwnershipStrategy {
        OwnershipStrategy::Raw
    }

    fn record_handle(&self, class: &str) -> String {
        format!("{class}*")
    }

    fn array_handle(&self, vector: &str) -> String {
        format!("{vector}*")
    }

    fn construct_array(&self, vector: &str, elements: &str) -> Result<String, EmitError> {
        Ok(format!("new {vector}{{{elements}}}"))
    }

    fn cast_to_record(&self, class: &str, value: &str) -> String {
        static_cast(&self.record_handle(class), value)
    }
}

impl OwnershipPolicy for UniqueAndRawPointers {
    fn strategy(&self) -> OwnershipStrategy {
        OwnershipStrategy::UniqueAndRaw
    }

    fn record_handle(&self, class: &str) -> String {
        format!("{class}*")
    }

    fn array_handle(&self, vector: &str) -> String {
        format!("{vector}*")
    }

    fn construct_array(&self, vector: &str, elements: &str) -> Result<String, EmitError> {
        Ok(format!("std::unique_ptr<{vector}>(new {vector}{{{elements}}})"))
    }

    fn cast_to_record(&self, class: &str, value: &str) -> String {
        static_cast(&self.record_handle(class), value)
    }
}

impl OwnershipPolicy for SharedPointers {
    fn strategy(&self) -> OwnershipStrategy {
        OwnershipStrategy::Shared
    }

    fn record_handle(&self, class: &str) -> String {
        format!("std::shared_ptr<{class}>")
    }

    fn array_handle(&self, vector: &str) -> String {
        format!("std::shared_ptr<{vector}>")
    }

    fn construct_array(&self, _vector: &str, _elements: &str) -> Result<String, EmitError> {
        Err(EmitError::UnsupportedArrayLiteral {
            strategy: self.strategy(),
        })
    }

    fn cast_to_record(&self, class: &str, value: &str) -> String {
        format!("std::static_pointer_cast<{class}>({value})")
    }
}

/// Policy implementing `strategy`.
pub fn policy_for(strategy: OwnershipStrategy) -> &'static dyn OwnershipPolicy {
    match strategy {
        OwnershipStrategy::Raw => &RawPointers,
        OwnershipStrategy::UniqueAndRaw => &UniqueAndRawPointers,
        OwnershipStrategy::Shared => &SharedPointers,
    }
}
