//! Domain records returned by the backend.
//!
//! Records are backend-owned: the client deserializes them on fetch,
//! replaces them wholesale on refetch, and never assigns ids. Optional
//! nested records (`student`, `class`, ...) appear when the backend eager
//! loads the relation.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A backend-owned entity with a unique numeric identifier.
pub trait Record {
    fn id(&self) -> u64;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    Other,
}

/// Active/inactive flag shared by several records.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActiveStatus {
    Active,
    Inactive,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubjectKind {
    Theory,
    Practical,
    Both,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnrollmentStatus {
    Active,
    Completed,
    Dropped,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttendanceStatus {
    Present,
    Absent,
    Late,
    Excused,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FeeStatus {
    Paid,
    Pending,
    Overdue,
    Partial,
}

impl FeeStatus {
    /// Wire form, as sent in filter query strings.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Paid => "Paid",
            Self::Pending => "Pending",
            Self::Overdue => "Overdue",
            Self::Partial => "Partial",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PassFail {
    Pass,
    Fail,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub date_of_birth: String,
    pub address: Option<String>,
    pub guardian_name: Option<String>,
    pub guardian_phone: Option<String>,
    pub gender: Gender,
    pub status: ActiveStatus,
    pub admission_number: String,
    pub admission_date: String,
    pub profile_image: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Teacher {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: Option<String>,
    pub gender: Gender,
    pub qualification: Option<String>,
    pub specialization: Option<String>,
    pub joining_date: String,
    pub salary: Option<f64>,
    pub status: ActiveStatus,
    pub employee_id: String,
    pub profile_image: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SchoolClass {
    pub id: u64,
    pub name: String,
    pub section: Option<String>,
    pub teacher_id: Option<u64>,
    pub capacity: u32,
    pub room_number: Option<String>,
    pub status: ActiveStatus,
    pub description: Option<String>,
    pub teacher: Option<Teacher>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Subject {
    pub id: u64,
    pub name: String,
    pub code: String,
    pub teacher_id: Option<u64>,
    pub class_id: Option<u64>,
    pub credits: u32,
    #[serde(rename = "type")]
    pub kind: SubjectKind,
    pub status: ActiveStatus,
    pub description: Option<String>,
    pub teacher: Option<Teacher>,
    pub class: Option<SchoolClass>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Grade {
    pub id: u64,
    pub student_id: u64,
    pub subject_id: u64,
    pub exam_type: String,
    pub marks_obtained: f64,
    pub total_marks: f64,
    pub percentage: f64,
    pub grade: String,
    pub exam_date: String,
    pub academic_year: String,
    pub remarks: Option<String>,
    pub student: Option<Student>,
    pub subject: Option<Subject>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

/// Aggregate exam result; named to avoid colliding with `std::result::Result`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExamResult {
    pub id: u64,
    pub student_id: u64,
    pub class_id: u64,
    pub exam_type: String,
    pub total_marks: f64,
    pub obtained_marks: f64,
    pub percentage: f64,
    pub grade: String,
    pub division: Option<String>,
    pub result_status: PassFail,
    pub rank: Option<u32>,
    pub academic_year: String,
    pub remarks: Option<String>,
    pub student: Option<Student>,
    pub class: Option<SchoolClass>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Enrollment {
    pub id: u64,
    pub student_id: u64,
    pub class_id: u64,
    pub enrollment_date: String,
    pub academic_year: String,
    pub status: EnrollmentStatus,
    pub remarks: Option<String>,
    pub student: Option<Student>,
    pub class: Option<SchoolClass>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Attendance {
    pub id: u64,
    pub student_id: u64,
    pub class_id: u64,
    pub subject_id: Option<u64>,
    pub date: String,
    pub status: AttendanceStatus,
    pub check_in_time: Option<String>,
    pub check_out_time: Option<String>,
    pub remarks: Option<String>,
    pub student: Option<Student>,
    pub class: Option<SchoolClass>,
    pub subject: Option<Subject>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Fee {
    pub id: u64,
    pub student_id: u64,
    pub fee_type: String,
    pub amount: f64,
    pub paid_amount: f64,
    pub pending_amount: f64,
    pub due_date: String,
    pub paid_date: Option<String>,
    pub status: FeeStatus,
    pub payment_method: Option<String>,
    pub transaction_id: Option<String>,
    pub academic_year: String,
    pub remarks: Option<String>,
    pub student: Option<Student>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl Record for Student {
    fn id(&self) -> u64 {
        self.id
    }
}

impl Record for Teacher {
    fn id(&self) -> u64 {
        self.id
    }
}

impl Record for SchoolClass {
    fn id(&self) -> u64 {
        self.id
    }
}

impl Record for Subject {
    fn id(&self) -> u64 {
        self.id
    }
}

impl Record for Grade {
    fn id(&self) -> u64 {
        self.id
    }
}

impl Record for ExamResult {
    fn id(&self) -> u64 {
        self.id
    }
}

impl Record for Enrollment {
    fn id(&self) -> u64 {
        self.id
    }
}

impl Record for Attendance {
    fn id(&self) -> u64 {
        self.id
    }
}

impl Record for Fee {
    fn id(&self) -> u64 {
        self.id
    }
}

/// Aggregates behind `GET /dashboard/stats`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DashboardData {
    pub overview: DashboardOverview,
    pub recent_enrollments: Vec<Enrollment>,
    pub fee_statistics: FeeStatistics,
    pub attendance_summary: AttendanceSummary,
    #[serde(default)]
    pub top_performers: Vec<Value>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardOverview {
    pub total_students: u64,
    pub total_teachers: u64,
    pub total_classes: u64,
    pub total_subjects: u64,
    pub total_enrollments: u64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FeeStatistics {
    pub total_fees: f64,
    pub collected_fees: f64,
    pub pending_fees: f64,
    pub overdue_fees: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AttendanceSummary {
    pub total_today: u64,
    pub present_today: u64,
    pub absent_today: u64,
    pub attendance_rate: f64,
}
