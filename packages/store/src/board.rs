//! # Board state reconciler
//!
//! [`Board`] tracks which [`Person`] sits in which [`Column`]. People not in
//! any column are "unassigned"; that list is derived on demand and never
//! stored, so it cannot drift from the column contents.
//!
//! Every mutation goes through [`Board::move_person`], which removes the
//! person from all columns and then appends them to the target (if any).
//! After each call a person id appears in at most one column.

use thiserror::Error;

use crate::models::{Column, Person};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("Unknown person: {0}")]
    UnknownPerson(String),
    #[error("Unknown column: {0}")]
    UnknownColumn(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    people: Vec<Person>,
    columns: Vec<Column>,
}

impl Board {
    pub fn new(people: Vec<Person>, columns: Vec<Column>) -> Self {
        Self { people, columns }
    }

    /// The seeded demo board: eight people, three empty projects.
    pub fn demo() -> Self {
        let people = vec![
            Person::new("person-1", "Alex Johnson", "Frontend Developer", "https://randomuser.me/api/portraits/men/32.jpg"),
            Person::new("person-2", "Sarah Williams", "UI/UX Designer", "https://randomuser.me/api/portraits/women/44.jpg"),
            Person::new("person-3", "Michael Chen", "Backend Engineer", "https://randomuser.me/api/portraits/men/59.jpg"),
            Person::new("person-4", "Priya Patel", "Data Scientist", "https://randomuser.me/api/portraits/women/26.jpg"),
            Person::new("person-5", "Emily Davis", "Product Manager", "https://randomuser.me/api/portraits/women/12.jpg"),
            Person::new("person-6", "John Smith", "DevOps Engineer", "https://randomuser.me/api/portraits/men/45.jpg"),
            Person::new("person-7", "Sophia Brown", "QA Engineer", "https://randomuser.me/api/portraits/women/33.jpg"),
            Person::new("person-8", "David Wilson", "Mobile Developer", "https://randomuser.me/api/portraits/men/28.jpg"),
        ];
        let columns = vec![
            Column::new("project-1", "Project 1"),
            Column::new("project-2", "Project 2"),
            Column::new("project-3", "Project 3"),
        ];
        Self::new(people, columns)
    }

    pub fn people(&self) -> &[Person] {
        &self.people
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn person(&self, id: &str) -> Option<&Person> {
        self.people.iter().find(|p| p.id == id)
    }

    pub fn column(&self, id: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.id == id)
    }

    /// Move a person into `target`, or back to the unassigned pool when
    /// `target` is `None`. Unknown ids leave the board untouched.
    pub fn move_person(&mut self, person_id: &str, target: Option<&str>) -> Result<(), BoardError> {
        if self.person(person_id).is_none() {
            return Err(BoardError::UnknownPerson(person_id.to_string()));
        }
        if let Some(column_id) = target {
            if self.column(column_id).is_none() {
                return Err(BoardError::UnknownColumn(column_id.to_string()));
            }
        }

        for column in &mut self.columns {
            column.items.retain(|id| id != person_id);
        }

        if let Some(column_id) = target {
            if let Some(column) = self.columns.iter_mut().find(|c| c.id == column_id) {
                column.items.push(person_id.to_string());
            }
        }
        Ok(())
    }

    /// People not assigned to any column, in seed order.
    pub fn unassigned(&self) -> Vec<&Person> {
        self.people
            .iter()
            .filter(|p| self.location_of(&p.id).is_none())
            .collect()
    }

    /// People in a column, in arrival order.
    pub fn people_in(&self, column_id: &str) -> Vec<&Person> {
        self.column(column_id)
            .map(|c| c.items.iter().filter_map(|id| self.person(id)).collect())
            .unwrap_or_default()
    }

    /// The column a person is assigned to, if any.
    pub fn location_of(&self, person_id: &str) -> Option<&str> {
        self.columns
            .iter()
            .find(|c| c.contains(person_id))
            .map(|c| c.id.as_str())
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::demo()
    }
}
