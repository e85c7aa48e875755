//! Pagination parameters and paginated envelopes.

// self
use crate::{
	_prelude::*,
	model::{QueryParams, push_opt},
};

/// Sort direction for paginated listings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
	/// Ascending.
	Asc,
	/// Descending.
	Desc,
}
impl SortOrder {
	/// Returns the wire label.
	pub const fn as_str(self) -> &'static str {
		match self {
			SortOrder::Asc => "asc",
			SortOrder::Desc => "desc",
		}
	}
}
impl Display for SortOrder {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Common pagination parameters (`page`, `limit`, `sortBy`, `sortOrder`).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PaginationParams {
	/// 1-based page number.
	pub page: Option<u32>,
	/// Page size.
	pub limit: Option<u32>,
	/// Field to sort by.
	pub sort_by: Option<String>,
	/// Sort direction.
	pub sort_order: Option<SortOrder>,
}
impl PaginationParams {
	/// Requests a specific page and page size.
	pub fn page(page: u32, limit: u32) -> Self {
		Self { page: Some(page), limit: Some(limit), ..Default::default() }
	}

	/// Sorts the listing by `field` in `order`.
	pub fn sorted_by(mut self, field: impl Into<String>, order: SortOrder) -> Self {
		self.sort_by = Some(field.into());
		self.sort_order = Some(order);

		self
	}
}
impl QueryParams for PaginationParams {
	fn append_to(&self, out: &mut Vec<(String, String)>) {
		push_opt(out, "page", self.page);
		push_opt(out, "limit", self.limit);
		push_opt(out, "sortBy", self.sort_by.as_deref());
		push_opt(out, "sortOrder", self.sort_order);
	}
}

/// Paginated listing envelope.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Paginated<T> {
	/// Items on this page.
	pub data: Vec<T>,
	/// Position of this page within the full listing.
	pub pagination: PageInfo,
}

/// Pagination block of a [`Paginated`] envelope.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
	/// Current page.
	pub page: u32,
	/// Page size.
	pub limit: u32,
	/// Total items across all pages.
	pub total: u64,
	/// Total number of pages.
	pub total_pages: u32,
}
impl PageInfo {
	/// Returns `true` when more pages follow this one.
	pub fn has_next(&self) -> bool {
		self.page < self.total_pages
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn pagination_params_skip_unset_values() {
		let mut out = Vec::new();

		PaginationParams::page(2, 25).sorted_by("executedAt", SortOrder::Desc).append_to(&mut out);

		assert_eq!(
			out,
			vec![
				("page".to_owned(), "2".to_owned()),
				("limit".to_owned(), "25".to_owned()),
				("sortBy".to_owned(), "executedAt".to_owned()),
				("sortOrder".to_owned(), "desc".to_owned()),
			],
		);

		let mut out = Vec::new();

		PaginationParams::default().append_to(&mut out);

		assert!(out.is_empty());
	}

	#[test]
	fn page_info_reports_remaining_pages() {
		let page: Paginated<u32> = serde_json::from_str(
			r#"{"data":[1,2],"pagination":{"page":1,"limit":2,"total":3,"totalPages":2}}"#,
		)
		.expect("Paginated envelope should parse.");

		assert_eq!(page.data, vec![1, 2]);
		assert!(page.pagination.has_next());
	}
}
