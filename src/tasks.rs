//! Task Aggregation
//!
//! Collects homework, exams and projects from the metadata map. A task comes
//! either from a whole file (front-matter `type`) or from a `:::homework`,
//! `:::exam` or `:::project` block inside a file.

use crate::metadata::{ComponentKind, MetadataMap, MetadataRecord};
use crate::tree::sort_key::SortKey;
use crate::tree::title::title_from_filename;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashMap;
use tracing::{debug, info};

/// Task category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskKind {
    Homework,
    Exam,
    Project,
}

impl TaskKind {
    /// Interpret a front-matter `type` value.
    pub fn from_type(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "homework" | "tarea" => Some(TaskKind::Homework),
            "exam" | "exams" | "examen" => Some(TaskKind::Exam),
            "project" | "projects" | "proyecto" => Some(TaskKind::Project),
            _ => None,
        }
    }

    pub fn from_component(kind: ComponentKind) -> Option<Self> {
        match kind {
            ComponentKind::Homework => Some(TaskKind::Homework),
            ComponentKind::Exam => Some(TaskKind::Exam),
            ComponentKind::Project => Some(TaskKind::Project),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TaskKind::Homework => "homework",
            TaskKind::Exam => "exam",
            TaskKind::Project => "project",
        }
    }
}

/// Where a task was declared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskSource {
    File,
    Component,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub title: String,
    pub kind: TaskKind,
    pub path: String,
    pub due: Option<String>,
    pub source: TaskSource,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

/// Tasks grouped by category, each list in due-date order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskIndex {
    pub homework: Vec<Task>,
    pub exams: Vec<Task>,
    pub projects: Vec<Task>,
}

impl TaskIndex {
    pub fn total(&self) -> usize {
        self.homework.len() + self.exams.len() + self.projects.len()
    }

    /// Category name and tasks, in output order.
    pub fn lists(&self) -> [(&'static str, &[Task]); 3] {
        [
            ("homework", self.homework.as_slice()),
            ("exams", self.exams.as_slice()),
            ("projects", self.projects.as_slice()),
        ]
    }

    fn push(&mut self, task: Task) {
        match task.kind {
            TaskKind::Homework => self.homework.push(task),
            TaskKind::Exam => self.exams.push(task),
            TaskKind::Project => self.projects.push(task),
        }
    }

    fn sort(&mut self) {
        for list in [&mut self.homework, &mut self.exams, &mut self.projects] {
            list.sort_by(compare_tasks);
        }
    }
}

/// Parse an ISO `YYYY-MM-DD` date, ignoring any trailing time part.
pub fn parse_due(raw: &str) -> Option<NaiveDate> {
    let date = raw.trim().get(..10)?;
    NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()
}

/// Per-segment sort keys, so paths compare in presentation order.
fn path_order(path: &str) -> Vec<SortKey> {
    path.split('/').map(SortKey::from_name).collect()
}

/// Dated tasks first (earliest first), then presentation order, then id.
fn compare_tasks(a: &Task, b: &Task) -> Ordering {
    let due_a = a.due.as_deref().and_then(parse_due);
    let due_b = b.due.as_deref().and_then(parse_due);
    let by_due = match (due_a, due_b) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    };
    by_due
        .then_with(|| path_order(&a.path).cmp(&path_order(&b.path)))
        .then_with(|| a.id.cmp(&b.id))
}

fn file_stem(path: &str) -> &str {
    let name = path.rsplit('/').next().unwrap_or(path);
    name.strip_suffix(".md").unwrap_or(name)
}

fn tasks_for_record(path: &str, record: &MetadataRecord) -> Vec<Task> {
    let stem = file_stem(path);
    let file_title = record
        .title
        .clone()
        .unwrap_or_else(|| title_from_filename(stem));
    let mut tasks = Vec::new();

    if let Some(kind) = record.kind.as_deref().and_then(TaskKind::from_type) {
        tasks.push(Task {
            id: record.id.clone().unwrap_or_else(|| stem.to_string()),
            title: file_title.clone(),
            kind,
            path: path.to_string(),
            due: record.due.clone(),
            source: TaskSource::File,
            summary: record.summary.clone(),
        });
    }

    let mut seen: HashMap<TaskKind, usize> = HashMap::new();
    for component in &record.components {
        let Some(kind) = TaskKind::from_component(component.kind) else {
            continue;
        };
        let position = seen.entry(kind).or_insert(0);
        *position += 1;
        tasks.push(Task {
            id: component
                .id
                .clone()
                .unwrap_or_else(|| format!("{}-{}-{}", stem, kind.as_str(), position)),
            title: component
                .title
                .clone()
                .unwrap_or_else(|| file_title.clone()),
            kind,
            path: path.to_string(),
            due: component.due.clone().or_else(|| record.due.clone()),
            source: TaskSource::Component,
            summary: None,
        });
    }
    tasks
}

/// Aggregate all tasks declared in `metadata`. Draft files are skipped.
pub fn aggregate_all_tasks(metadata: &MetadataMap) -> TaskIndex {
    let mut index = TaskIndex::default();
    for (path, record) in metadata {
        if record.draft {
            debug!(path = %path, "Skipping draft");
            continue;
        }
        for task in tasks_for_record(path, record) {
            debug!(path = %path, id = %task.id, kind = task.kind.as_str(), "Found task");
            index.push(task);
        }
    }
    index.sort();
    info!(
        homework = index.homework.len(),
        exams = index.exams.len(),
        projects = index.projects.len(),
        "Task aggregation complete"
    );
    index
}
