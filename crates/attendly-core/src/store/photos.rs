// Employee photo store.
//
// Holds photo URLs for one employee at a time. Deletion filters by
// substring match on the filename: the backend addresses photos by
// bare filename while the store holds full URLs.

use attendly_api::Error as ApiError;

use super::slice::{Slice, SliceState};

#[derive(Default)]
pub struct PhotosStore {
    slice: Slice<Vec<String>>,
}

impl PhotosStore {
    pub fn pending(&self) {
        self.slice.pending();
    }

    pub fn listed(&self, urls: Vec<String>) {
        self.slice.fulfill(urls);
    }

    /// Append the URL of a freshly uploaded photo.
    pub fn added(&self, url: String) {
        self.slice.mutate(|s| {
            s.loading = false;
            s.data.push(url);
        });
    }

    /// Remove every URL containing the deleted filename.
    pub fn deleted(&self, file_name: &str) {
        self.slice.mutate(|s| {
            s.loading = false;
            s.data.retain(|url| !url.contains(file_name));
        });
    }

    pub fn failed(&self, err: &ApiError) {
        self.slice.reject(err.detail());
    }

    pub fn current(&self) -> SliceState<Vec<String>> {
        self.slice.current()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delete_filters_urls_containing_filename() {
        let store = PhotosStore::default();
        store.listed(vec![
            "/static/E1/a.jpg".into(),
            "/static/E1/b.jpg".into(),
        ]);
        store.deleted("a.jpg");
        assert_eq!(store.current().data, vec!["/static/E1/b.jpg".to_owned()]);
    }

    #[test]
    fn add_appends_returned_url() {
        let store = PhotosStore::default();
        store.listed(vec![]);
        store.added("/static/E1/new.jpg".into());
        assert_eq!(store.current().data.len(), 1);
    }
}
