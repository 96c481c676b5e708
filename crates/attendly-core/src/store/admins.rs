// Admin account store.
//
// Writes do not refetch: a create appends the record the response
// already carries, a delete filters the in-memory list by id equality.
// The server response body plays no further part in either.

use attendly_api::{Admin, Error as ApiError};

use super::slice::{Slice, SliceState};

#[derive(Default)]
pub struct AdminsStore {
    slice: Slice<Vec<Admin>>,
}

impl AdminsStore {
    pub fn pending(&self) {
        self.slice.pending();
    }

    /// List fetch clears before loading (stale admins never linger).
    pub fn begin_list(&self) {
        self.slice.mutate(|s| {
            s.data.clear();
            s.loading = true;
            s.error = None;
        });
    }

    pub fn listed(&self, admins: Vec<Admin>) {
        self.slice.fulfill(admins);
    }

    /// Append the created record from the create response.
    pub fn added(&self, admin: Admin) {
        self.slice.mutate(|s| {
            s.loading = false;
            s.data.push(admin);
        });
    }

    /// Drop the deleted id from the local list.
    pub fn deleted(&self, id: i64) {
        self.slice.mutate(|s| {
            s.loading = false;
            s.data.retain(|a| a.id != id);
        });
    }

    pub fn failed(&self, err: &ApiError) {
        self.slice.reject(err.detail());
    }

    pub fn current(&self) -> SliceState<Vec<Admin>> {
        self.slice.current()
    }
}
