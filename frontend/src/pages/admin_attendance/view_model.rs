use super::repository::AttendanceOverviewRepository;
use crate::{
    api::{ApiClient, AttendanceRecord},
    state::{resource::RemoteResource, table::TableState},
};
use leptos::*;
use std::rc::Rc;

pub type OverviewResource = RemoteResource<(), Vec<AttendanceRecord>>;

pub fn overview_resource(repo: AttendanceOverviewRepository) -> OverviewResource {
    RemoteResource::new(move |_: ()| {
        let repo = repo.clone();
        async move { repo.list().await }
    })
}

#[derive(Clone, Copy)]
pub struct AdminAttendanceViewModel {
    pub records: OverviewResource,
    pub table: TableState,
}

impl AdminAttendanceViewModel {
    pub fn rows(&self) -> Signal<Vec<AttendanceRecord>> {
        let data = self.records.data();
        Signal::derive(move || data.get().unwrap_or_default())
    }
}

pub fn use_admin_attendance_view_model() -> AdminAttendanceViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let records = overview_resource(AttendanceOverviewRepository::new_with_client(Rc::new(api)));
    records.load(());
    AdminAttendanceViewModel {
        records,
        table: TableState::with_default_page_size(),
    }
}
