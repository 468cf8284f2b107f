//! Named API services, one per backend resource.
//!
//! Each service is the generated CRUD set from [`ResourceClient`] plus the
//! ad-hoc endpoints that resource actually exposes. Filtered reads
//! (`by_student`, `by_date`, ...) are plain list calls with a query filter;
//! the backend treats them as the same `GET {base}` endpoint.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

use crate::net::client::ApiClient;
use crate::net::error::ApiError;
use crate::net::resource::{ListQuery, ResourceClient};
use crate::net::transport::{ApiRequest, Method, Transport};
use crate::net::types::{
    Attendance, DashboardData, Enrollment, ExamResult, Fee, FeeStatus, Grade, SchoolClass,
    Student, Subject, Teacher,
};

/// CRUD + free-text search over `/students`.
pub struct StudentsApi<T: Transport> {
    pub crud: ResourceClient<T, Student>,
}

impl<T: Transport> StudentsApi<T> {
    pub fn new(api: Arc<ApiClient<T>>) -> Self {
        Self {
            crud: ResourceClient::new(api, "/students"),
        }
    }

    /// `GET /students/search?q=...`.
    pub async fn search(&self, query: &str) -> Result<Vec<Student>, ApiError> {
        self.crud
            .get_all_at("search", &ListQuery::new().filter("q", query))
            .await
    }
}

/// CRUD + free-text search over `/teachers`.
pub struct TeachersApi<T: Transport> {
    pub crud: ResourceClient<T, Teacher>,
}

impl<T: Transport> TeachersApi<T> {
    pub fn new(api: Arc<ApiClient<T>>) -> Self {
        Self {
            crud: ResourceClient::new(api, "/teachers"),
        }
    }

    /// `GET /teachers/search?q=...`.
    pub async fn search(&self, query: &str) -> Result<Vec<Teacher>, ApiError> {
        self.crud
            .get_all_at("search", &ListQuery::new().filter("q", query))
            .await
    }
}

/// CRUD over `/subjects`, with a teacher-name filter.
pub struct SubjectsApi<T: Transport> {
    pub crud: ResourceClient<T, Subject>,
}

impl<T: Transport> SubjectsApi<T> {
    pub fn new(api: Arc<ApiClient<T>>) -> Self {
        Self {
            crud: ResourceClient::new(api, "/subjects"),
        }
    }

    pub async fn by_teacher(&self, teacher_name: &str) -> Result<Vec<Subject>, ApiError> {
        self.crud
            .get_all(&ListQuery::new().filter("teacherName", teacher_name))
            .await
    }
}

/// CRUD over `/grades`, with a per-student filter.
pub struct GradesApi<T: Transport> {
    pub crud: ResourceClient<T, Grade>,
}

impl<T: Transport> GradesApi<T> {
    pub fn new(api: Arc<ApiClient<T>>) -> Self {
        Self {
            crud: ResourceClient::new(api, "/grades"),
        }
    }

    pub async fn by_student(&self, student_id: u64) -> Result<Vec<Grade>, ApiError> {
        self.crud
            .get_all(&ListQuery::new().filter("studentId", student_id))
            .await
    }
}

/// CRUD over `/results`, with a per-student filter.
pub struct ResultsApi<T: Transport> {
    pub crud: ResourceClient<T, ExamResult>,
}

impl<T: Transport> ResultsApi<T> {
    pub fn new(api: Arc<ApiClient<T>>) -> Self {
        Self {
            crud: ResourceClient::new(api, "/results"),
        }
    }

    pub async fn by_student(&self, student_id: u64) -> Result<Vec<ExamResult>, ApiError> {
        self.crud
            .get_all(&ListQuery::new().filter("studentId", student_id))
            .await
    }
}

/// CRUD over `/enrollments`, with a per-student filter.
pub struct EnrollmentsApi<T: Transport> {
    pub crud: ResourceClient<T, Enrollment>,
}

impl<T: Transport> EnrollmentsApi<T> {
    pub fn new(api: Arc<ApiClient<T>>) -> Self {
        Self {
            crud: ResourceClient::new(api, "/enrollments"),
        }
    }

    pub async fn by_student(&self, student_id: u64) -> Result<Vec<Enrollment>, ApiError> {
        self.crud
            .get_all(&ListQuery::new().filter("studentId", student_id))
            .await
    }
}

/// CRUD over `/attendance`, plus date/student filters and bulk marking.
pub struct AttendanceApi<T: Transport> {
    pub crud: ResourceClient<T, Attendance>,
}

impl<T: Transport> AttendanceApi<T> {
    pub fn new(api: Arc<ApiClient<T>>) -> Self {
        Self {
            crud: ResourceClient::new(api, "/attendance"),
        }
    }

    pub async fn by_date(&self, date: &str) -> Result<Vec<Attendance>, ApiError> {
        self.crud
            .get_all(&ListQuery::new().filter("date", date))
            .await
    }

    pub async fn by_student(&self, student_id: u64) -> Result<Vec<Attendance>, ApiError> {
        self.crud
            .get_all(&ListQuery::new().filter("studentId", student_id))
            .await
    }

    /// `POST /attendance/bulk` with `{records: [...]}`, marking a whole
    /// class in one call.
    pub async fn mark_bulk<P: Serialize>(&self, records: &[P]) -> Result<Vec<Attendance>, ApiError> {
        #[derive(Serialize)]
        struct BulkPayload<'a, P> {
            records: &'a [P],
        }
        self.crud
            .post_list_at("bulk", &BulkPayload { records })
            .await
    }
}

/// CRUD over `/fees`, with status and per-student filters.
pub struct FeesApi<T: Transport> {
    pub crud: ResourceClient<T, Fee>,
}

impl<T: Transport> FeesApi<T> {
    pub fn new(api: Arc<ApiClient<T>>) -> Self {
        Self {
            crud: ResourceClient::new(api, "/fees"),
        }
    }

    pub async fn by_student(&self, student_id: u64) -> Result<Vec<Fee>, ApiError> {
        self.crud
            .get_all(&ListQuery::new().filter("studentId", student_id))
            .await
    }

    pub async fn by_status(&self, status: FeeStatus) -> Result<Vec<Fee>, ApiError> {
        self.crud
            .get_all(&ListQuery::new().filter("status", status.as_str()))
            .await
    }
}

/// Read-only aggregates under `/dashboard/*`.
///
/// Only `stats` has a stable documented shape; the chart feeds come back as
/// raw JSON for the host page to pick apart.
pub struct DashboardApi<T: Transport> {
    api: Arc<ApiClient<T>>,
}

impl<T: Transport> DashboardApi<T> {
    pub fn new(api: Arc<ApiClient<T>>) -> Self {
        Self { api }
    }

    /// `GET /dashboard/stats`.
    pub async fn stats(&self) -> Result<DashboardData, ApiError> {
        self.api.get_one("/dashboard/stats", Vec::new()).await
    }

    /// `GET /dashboard/enrollments?month=...`.
    pub async fn monthly_enrollments(&self, month: Option<u32>) -> Result<Value, ApiError> {
        let mut query = Vec::new();
        if let Some(month) = month {
            query.push(("month".to_owned(), month.to_string()));
        }
        self.api
            .send(ApiRequest::new(Method::Get, "/dashboard/enrollments").with_query(query))
            .await
    }

    /// `GET /dashboard/attendance`.
    pub async fn attendance_overview(&self) -> Result<Value, ApiError> {
        self.raw("/dashboard/attendance").await
    }

    /// `GET /dashboard/revenue`.
    pub async fn monthly_revenue(&self) -> Result<Value, ApiError> {
        self.raw("/dashboard/revenue").await
    }

    /// `GET /dashboard/reports`.
    pub async fn reports(&self) -> Result<Value, ApiError> {
        self.raw("/dashboard/reports").await
    }

    async fn raw(&self, path: &str) -> Result<Value, ApiError> {
        self.api.send(ApiRequest::new(Method::Get, path)).await
    }
}

/// One instance per backend: hands out the per-resource services, all
/// sharing the same client (and therefore the same session and interceptor).
pub struct SchoolApi<T: Transport> {
    pub students: StudentsApi<T>,
    pub teachers: TeachersApi<T>,
    pub classes: ResourceClient<T, SchoolClass>,
    pub subjects: SubjectsApi<T>,
    pub grades: GradesApi<T>,
    pub results: ResultsApi<T>,
    pub enrollments: EnrollmentsApi<T>,
    pub attendance: AttendanceApi<T>,
    pub fees: FeesApi<T>,
    pub dashboard: DashboardApi<T>,
}

impl<T: Transport> SchoolApi<T> {
    pub fn new(api: Arc<ApiClient<T>>) -> Self {
        Self {
            students: StudentsApi::new(Arc::clone(&api)),
            teachers: TeachersApi::new(Arc::clone(&api)),
            classes: ResourceClient::new(Arc::clone(&api), "/classes"),
            subjects: SubjectsApi::new(Arc::clone(&api)),
            grades: GradesApi::new(Arc::clone(&api)),
            results: ResultsApi::new(Arc::clone(&api)),
            enrollments: EnrollmentsApi::new(Arc::clone(&api)),
            attendance: AttendanceApi::new(Arc::clone(&api)),
            fees: FeesApi::new(Arc::clone(&api)),
            dashboard: DashboardApi::new(api),
        }
    }
}
