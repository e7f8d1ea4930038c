//! Filter criteria for listing `foo` records.

mod decode;

pub use decode::{FOO_LIST_FIELDS, FieldSpec, decode_pairs, decode_query};

use crate::query_builder::{Page, Wheres};
use crate::types::RowValues;

/// Anything that can contribute conditions to a list query.
///
/// Implementations must only append to `wheres`, never reorder or drop what is already there,
/// so several filters can be merged into one statement.
pub trait ListFilter {
    fn apply(&self, wheres: &mut Wheres);
}

/// Which `foo` records a list call should return.
///
/// Every field is "not provided" at its zero value: no ids, an empty `value`, a zero page size.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FooListOptions {
    /// Match any of these ids.
    pub ids: Vec<i64>,
    /// Match `value` exactly.
    pub value: String,
    pub page: Page,
}

impl FooListOptions {
    pub const ID_COLUMN: &'static str = "id";
    pub const VALUE_COLUMN: &'static str = "value";

    /// `id IN (..)` over `ids`, in the order they were supplied.
    pub fn append_id_filter(&self, wheres: &mut Wheres) {
        wheres.push_in(
            Self::ID_COLUMN,
            self.ids.iter().copied().map(RowValues::Int),
        );
    }

    /// `value = ..` when `value` is non-empty.
    pub fn append_equality_filter(&self, wheres: &mut Wheres) {
        if !self.value.is_empty() {
            wheres.push_eq(Self::VALUE_COLUMN, RowValues::Text(self.value.clone()));
        }
    }
}

impl ListFilter for FooListOptions {
    fn apply(&self, wheres: &mut Wheres) {
        self.append_id_filter(wheres);
        self.append_equality_filter(wheres);
    }
}
