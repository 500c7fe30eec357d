//! Query-string paging parameters shared by the search endpoints.

use serde::Deserialize;
use utoipa::IntoParams;

use crate::domain::{Error, SearchPage};

/// Optional `limit` and `offset` parameters.
///
/// The `search` parameter is read separately from the raw query string so an
/// absent parameter stays distinguishable from `search=`.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageParams {
    /// Maximum number of users returned (1 to 100, larger values are capped).
    pub limit: Option<usize>,
    /// Number of ordered matches to skip.
    pub offset: Option<usize>,
}

impl PageParams {
    /// Resolve the page window, filling gaps from `default_limit`.
    pub fn to_page(&self, default_limit: usize) -> Result<SearchPage, Error> {
        Ok(SearchPage::new(
            self.limit.unwrap_or(default_limit),
            self.offset.unwrap_or(0),
        )?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;
    use rstest::rstest;

    #[rstest]
    #[case(PageParams::default(), 50, 0)]
    #[case(PageParams { limit: Some(5), offset: None }, 5, 0)]
    #[case(PageParams { limit: Some(1_000), offset: Some(7) }, 100, 7)]
    fn resolves_page_from_params(
        #[case] params: PageParams,
        #[case] limit: usize,
        #[case] offset: usize,
    ) {
        let page = params.to_page(50).expect("valid page");
        assert_eq!((page.limit(), page.offset()), (limit, offset));
    }

    #[rstest]
    fn zero_limit_is_invalid_request() {
        let params = PageParams {
            limit: Some(0),
            offset: None,
        };
        let err = params.to_page(50).expect_err("zero limit rejected");
        assert_eq!(err.code(), ErrorCode::InvalidRequest);
    }
}
