use crate::api::{AttendanceRecord, AttendanceReportRow, Employee, LeaveRequest};

/// Rows that a free-text search box can match against.
pub trait Searchable {
    fn search_fields(&self) -> Vec<String>;

    /// `needle` must already be normalized with [`normalize_query`].
    fn matches(&self, needle: &str) -> bool {
        needle.is_empty()
            || self
                .search_fields()
                .iter()
                .any(|field| field.to_lowercase().contains(needle))
    }
}

pub fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}

pub fn filter_items<T: Searchable + Clone>(items: &[T], query: &str) -> Vec<T> {
    let needle = normalize_query(query);
    items
        .iter()
        .filter(|item| item.matches(&needle))
        .cloned()
        .collect()
}

impl Searchable for Employee {
    fn search_fields(&self) -> Vec<String> {
        let mut fields = vec![self.full_name(), self.email.clone()];
        fields.extend(self.department.clone());
        fields.extend(self.position.clone());
        fields
    }
}

impl Searchable for LeaveRequest {
    fn search_fields(&self) -> Vec<String> {
        let mut fields = vec![self.leave_type.clone(), self.status.label().to_string()];
        fields.extend(self.employee_name.clone());
        fields.extend(self.reason.clone());
        fields
    }
}

impl Searchable for AttendanceRecord {
    fn search_fields(&self) -> Vec<String> {
        let mut fields = vec![self.date.format("%Y-%m-%d").to_string()];
        fields.extend(self.employee_name.clone());
        fields
    }
}

impl Searchable for AttendanceReportRow {
    fn search_fields(&self) -> Vec<String> {
        vec![self.employee_name.clone(), self.employee_id.clone()]
    }
}
