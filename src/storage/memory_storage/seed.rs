//! 演示数据

use chrono::{DateTime, NaiveDate, Utc};

use crate::models::{
    assignments::entities::{Assignment, AssignmentStatus},
    students::entities::{Student, StudentStatus},
    submissions::entities::{Submission, SubmissionStatus},
};
use crate::storage::Collections;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("Invalid seed date")
}

fn timestamp(rfc3339: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(rfc3339)
        .expect("Invalid seed timestamp")
        .with_timezone(&Utc)
}

fn student(
    id: &str,
    first_name: &str,
    last_name: &str,
    email: &str,
    group: &str,
    enrolled_at: NaiveDate,
    status: StudentStatus,
) -> Student {
    Student {
        id: id.to_string(),
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        email: email.to_string(),
        group: group.to_string(),
        enrolled_at,
        status,
    }
}

fn assignment(
    id: &str,
    title: &str,
    description: &str,
    due_date: NaiveDate,
    status: AssignmentStatus,
    max_score: f64,
    total_submissions: i64,
) -> Assignment {
    Assignment {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        due_date,
        status,
        max_score,
        total_submissions,
    }
}

fn submission(
    id: &str,
    student_id: &str,
    assignment_id: &str,
    submitted_at: &str,
    score: Option<f64>,
    status: SubmissionStatus,
) -> Submission {
    Submission {
        id: id.to_string(),
        student_id: student_id.to_string(),
        assignment_id: assignment_id.to_string(),
        submitted_at: timestamp(submitted_at),
        score,
        status,
    }
}

#[rustfmt::skip]
pub fn seed_students() -> Vec<Student> {
    use StudentStatus::*;
    vec![
        student("1", "Алексей", "Смирнов", "smirnov@student.lms.com", "ИВТ-21", date(2021, 9, 1), Active),
        student("2", "Мария", "Кузнецова", "kuznetsova@student.lms.com", "ИВТ-21", date(2021, 9, 1), Active),
        student("3", "Дмитрий", "Попов", "popov@student.lms.com", "ИВТ-22", date(2022, 9, 1), Active),
        student("4", "Екатерина", "Васильева", "vasilyeva@student.lms.com", "ИВТ-22", date(2022, 9, 1), Inactive),
        student("5", "Сергей", "Морозов", "morozov@student.lms.com", "ПИ-20", date(2020, 9, 1), Graduated),
        student("6", "Ольга", "Новикова", "novikova@student.lms.com", "ПИ-23", date(2023, 9, 1), Active),
    ]
}

#[rustfmt::skip]
pub fn seed_assignments() -> Vec<Assignment> {
    use AssignmentStatus::*;
    vec![
        assignment("1", "Курсовая работа по базам данных", "Проектирование схемы и нормализация", date(2024, 12, 15), Open, 100.0, 3),
        assignment("2", "Лабораторная работа №3", "Алгоритмы сортировки", date(2024, 10, 30), Closed, 50.0, 4),
        assignment("3", "Реферат по архитектуре ЭВМ", "Конвейерная обработка команд", date(2024, 11, 20), InReview, 100.0, 2),
        assignment("4", "Дипломный проект: этап 1", "Обзор предметной области", date(2025, 2, 1), Open, 100.0, 0),
    ]
}

#[rustfmt::skip]
pub fn seed_submissions() -> Vec<Submission> {
    use SubmissionStatus::*;
    vec![
        submission("1", "1", "2", "2024-10-28T14:30:00Z", Some(45.0), Graded),
        submission("2", "2", "2", "2024-10-29T09:15:00Z", Some(48.0), Graded),
        submission("3", "3", "2", "2024-10-30T22:40:00Z", None, Returned),
        submission("4", "6", "2", "2024-10-30T23:55:00Z", Some(38.0), Graded),
        submission("5", "1", "3", "2024-11-18T11:00:00Z", None, Pending),
        submission("6", "2", "3", "2024-11-19T16:20:00Z", None, Pending),
        submission("7", "1", "1", "2024-12-01T10:05:00Z", Some(92.0), Graded),
        submission("8", "3", "1", "2024-12-03T18:45:00Z", None, Pending),
        submission("9", "6", "1", "2024-12-05T08:30:00Z", Some(87.0), Graded),
    ]
}

/// 完整的演示数据集
pub fn seed_collections() -> Collections {
    Collections {
        students: seed_students(),
        assignments: seed_assignments(),
        submissions: seed_submissions(),
    }
}
