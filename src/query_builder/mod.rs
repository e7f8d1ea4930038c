//! Accumulates WHERE conditions with their bound parameters and assembles the final statement.
//!
//! Nothing in here touches a database or can fail: it only produces text plus an ordered
//! parameter list whose positions line up with the placeholders in that text.

mod page;

pub use page::Page;

use crate::translation::PlaceholderStyle;
use crate::types::RowValues;

/// Conditions to be joined with `AND`, and the parameters their placeholders refer to.
///
/// Entries are only ever appended, so several filters can write into the same `Wheres`
/// before the statement is built:
/// ```rust
/// use foo_store::prelude::*;
///
/// let mut wheres = Wheres::new();
/// wheres.push_in("id", [3_i64, 7, 9].map(RowValues::Int));
/// wheres.push_eq("value", RowValues::Text("hello".into()));
///
/// let sql = build_statement("SELECT id FROM foo", wheres.conditions(), "");
/// assert_eq!(sql, "SELECT id FROM foo WHERE id IN (?,?,?) AND value = ?");
/// assert_eq!(wheres.params().len(), 4);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Wheres {
    style: PlaceholderStyle,
    conditions: Vec<String>,
    params: Vec<RowValues>,
}

impl Wheres {
    /// Empty accumulator rendering anonymous `?` placeholders.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty accumulator rendering placeholders in `style`.
    #[must_use]
    pub fn with_style(style: PlaceholderStyle) -> Self {
        Self {
            style,
            ..Self::default()
        }
    }

    /// Continue accumulating on top of existing conditions and parameters.
    ///
    /// Numbered placeholders keep counting from `params.len()`.
    #[must_use]
    pub fn from_parts(
        style: PlaceholderStyle,
        conditions: Vec<String>,
        params: Vec<RowValues>,
    ) -> Self {
        Self {
            style,
            conditions,
            params,
        }
    }

    #[must_use]
    pub fn placeholder_style(&self) -> PlaceholderStyle {
        self.style
    }

    /// Append `column IN (..)` with one placeholder per value, in the order given.
    ///
    /// Does nothing when `values` is empty.
    pub fn push_in<I>(&mut self, column: &str, values: I)
    where
        I: IntoIterator<Item = RowValues>,
    {
        let markers: Vec<String> = values.into_iter().map(|value| self.bind(value)).collect();
        if markers.is_empty() {
            return;
        }
        self.conditions.push(format!("{column} IN ({})", markers.join(",")));
    }

    /// Append `column = <placeholder>`.
    pub fn push_eq(&mut self, column: &str, value: RowValues) {
        let marker = self.bind(value);
        self.conditions.push(format!("{column} = {marker}"));
    }

    /// Push a parameter and render its placeholder from the count *after* the push, so the
    /// ordinal always equals the parameter's 1-based position.
    fn bind(&mut self, value: RowValues) -> String {
        self.params.push(value);
        self.style.placeholder(self.params.len())
    }

    #[must_use]
    pub fn conditions(&self) -> &[String] {
        &self.conditions
    }

    #[must_use]
    pub fn params(&self) -> &[RowValues] {
        &self.params
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    #[must_use]
    pub fn into_parts(self) -> (Vec<String>, Vec<RowValues>) {
        (self.conditions, self.params)
    }
}

/// Append ` WHERE <conditions joined by AND>` and ` <pagination>` to `base`, each only when
/// non-empty.
#[must_use]
pub fn build_statement(base: &str, conditions: &[String], pagination: &str) -> String {
    let mut query = base.to_string();
    if !conditions.is_empty() {
        query.push_str(" WHERE ");
        query.push_str(&conditions.join(" AND "));
    }
    if !pagination.is_empty() {
        query.push(' ');
        query.push_str(pagination);
    }
    query
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "SELECT id, value, timestamp FROM foo";

    #[test]
    fn no_conditions_leaves_base_untouched() {
        assert_eq!(build_statement(BASE, &[], ""), BASE);
    }

    #[test]
    fn pagination_without_conditions() {
        let page = Page::new(10, 2);
        assert_eq!(
            build_statement(BASE, &[], &page.clause()),
            format!("{BASE} LIMIT 10 OFFSET 20")
        );
    }

    #[test]
    fn empty_in_list_adds_nothing() {
        let mut wheres = Wheres::new();
        wheres.push_in("id", Vec::new());
        assert!(wheres.is_empty());
        assert!(wheres.params().is_empty());
    }

    #[test]
    fn numbered_placeholders_count_prior_params() {
        let mut wheres = Wheres::from_parts(
            PlaceholderStyle::Postgres,
            vec!["kind = $1".to_string()],
            vec![RowValues::Text("a".into())],
        );
        wheres.push_in("id", [RowValues::Int(3), RowValues::Int(7)]);
        wheres.push_eq("value", RowValues::Text("hello".into()));

        assert_eq!(
            wheres.conditions(),
            ["kind = $1", "id IN ($2,$3)", "value = $4"]
        );
        assert_eq!(wheres.params()[3], RowValues::Text("hello".into()));
    }

    #[test]
    fn style_is_kept() {
        assert_eq!(Wheres::new().placeholder_style(), PlaceholderStyle::Question);
        let wheres = Wheres::from_parts(PlaceholderStyle::Postgres, Vec::new(), Vec::new());
        assert_eq!(wheres.placeholder_style(), PlaceholderStyle::Postgres);
    }

    #[test]
    fn sqlite_numbered_style() {
        let mut wheres = Wheres::with_style(PlaceholderStyle::Sqlite);
        wheres.push_eq("value", RowValues::Text("x".into()));
        wheres.push_in("id", [RowValues::Int(1)]);
        let (conditions, params) = wheres.into_parts();
        assert_eq!(conditions, ["value = ?1", "id IN (?2)"]);
        assert_eq!(params, [RowValues::Text("x".into()), RowValues::Int(1)]);
    }
}
