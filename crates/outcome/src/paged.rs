//! `PagedResult<T>`: a typed result plus page-position metadata.

use serde::Serialize;
use serde_json::Value;

use crate::outcome::{value_factories, AsOutcome, Outcome};
use crate::paging::{PageRequest, PagedInfo};
use crate::result::Result;

/// A [`Result`] for one page of a collection.
///
/// `paged_info` is only ever present on a `Success` built through
/// [`PagedResult::success`], [`PagedResult::success_with_message`] or
/// [`PagedResult::from_page`]; all failure factories leave it empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PagedResult<T> {
    #[serde(flatten)]
    result: Result<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    paged_info: Option<PagedInfo>,
}

impl<T> PagedResult<T> {
    pub(crate) fn from_result(result: Result<T>, paged_info: Option<PagedInfo>) -> Self {
        Self { result, paged_info }
    }

    fn from_outcome(outcome: Outcome, value: Option<T>) -> Self {
        Self::from_result(Result::from_outcome(outcome, value), None)
    }

    /// A successful page. There is deliberately no paged success without
    /// paging information.
    pub fn success(value: T, paged_info: PagedInfo) -> Self {
        Self::from_result(Result::success(value), Some(paged_info))
    }

    pub fn success_with_message(value: T, paged_info: PagedInfo, message: impl Into<String>) -> Self {
        Self::from_result(Result::success_with_message(value, message), Some(paged_info))
    }

    pub fn no_content() -> Self {
        Self::from_result(Result::no_content(), None)
    }

    pub fn paged_info(&self) -> Option<&PagedInfo> {
        self.paged_info.as_ref()
    }

    pub fn has_paged_info(&self) -> bool {
        self.paged_info.is_some()
    }

    pub fn value(&self) -> Option<&T> {
        self.result.value()
    }

    pub fn as_result(&self) -> &Result<T> {
        &self.result
    }

    /// Drop the paging information.
    pub fn into_result(self) -> Result<T> {
        self.result
    }

    pub fn into_parts(self) -> (Result<T>, Option<PagedInfo>) {
        (self.result, self.paged_info)
    }

    pub fn add_or_update_metadata(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.result.add_or_update_metadata(key, value);
    }

    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.result.add_or_update_metadata(key, value);
        self
    }

    pub fn with_correlation_id(mut self, correlation_id: impl Into<String>) -> Self {
        self.result = self.result.with_correlation_id(correlation_id);
        self
    }
}

impl<T> PagedResult<Vec<T>> {
    /// Wrap one already-sliced page of items.
    pub fn from_page(items: Vec<T>, request: &PageRequest, total_count: u64) -> Self {
        Self::success(items, PagedInfo::from_request(request, total_count))
    }
}

impl<T> AsOutcome for PagedResult<T> {
    fn as_outcome(&self) -> &Outcome {
        self.result.as_outcome()
    }
}

value_factories! {
    PagedResult;
    /// Generic business failure.
    failure, failure_with => Failure;
    forbidden, forbidden_with => Forbidden;
    unauthorized, unauthorized_with => Unauthorized;
    invalid, invalid_with => Invalid;
    not_found, not_found_with => NotFound;
    conflict, conflict_with => Conflict;
    unavailable, unavailable_with => Unavailable;
    unsupported, unsupported_with => Unsupported;
    validation_error, validation_error_with => ValidationError;
    critical_error, critical_error_with => CriticalError;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::status::ResultStatus;

    #[test]
    fn test_success_has_paged_info() {
        let page = PagedResult::success(vec!["a", "b"], PagedInfo::new(1, 2, 5));

        assert!(page.is_success());
        assert!(page.has_paged_info());
        assert_eq!(page.paged_info().map(|p| p.page_count), Some(3));
    }

    #[test]
    fn test_failures_never_have_paged_info() {
        let failures: Vec<PagedResult<Vec<u8>>> = vec![
            PagedResult::failure("x"),
            PagedResult::not_found("x"),
            PagedResult::unsupported_with(vec![1], "x"),
            PagedResult::critical_error("x"),
        ];

        for page in failures {
            assert!(!page.is_success());
            assert!(!page.has_paged_info());
        }
        assert!(!PagedResult::<Vec<u8>>::no_content().has_paged_info());
    }

    #[test]
    fn test_unsupported_status() {
        let page: PagedResult<()> = PagedResult::unsupported("no");
        assert_eq!(page.status(), ResultStatus::Unsupported);
    }

    #[test]
    fn test_from_page() {
        let page = PagedResult::from_page(vec![11, 12], &PageRequest::new(2, 10), 12);
        let info = page.paged_info().copied().unwrap();

        assert_eq!(info.first_item_on_page, 11);
        assert_eq!(info.last_item_on_page, 12);
        assert_eq!(page.value(), Some(&vec![11, 12]));
    }

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_value(PagedResult::success(vec![1], PagedInfo::new(1, 1, 1))).unwrap();
        assert_eq!(json["value"], serde_json::json!([1]));
        assert_eq!(json["pagedInfo"]["pageNumber"], 1);

        let failed = serde_json::to_value(PagedResult::<Vec<u8>>::not_found("x")).unwrap();
        assert!(failed.get("pagedInfo").is_none());
    }
}
