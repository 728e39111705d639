use serde::Serialize;

#[derive(Serialize, Debug)]
pub(super) struct CategoryPageData<'a> {
    pub category: &'a str,
}
