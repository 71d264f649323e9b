//! The student store.

use super::types::{Student, StudentId, TagId};

/// Ordered, mutable list of students.
///
/// Insertion order is kept; [`StudentRoster::sorted`] gives the display
/// order.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StudentRoster {
    students: Vec<Student>,
    next_id: u32,
}

impl StudentRoster {
    pub fn new() -> Self {
        Self {
            students: Vec::new(),
            next_id: 1,
        }
    }

    fn allocate_id(&mut self) -> StudentId {
        // Default-constructed rosters start at zero; skip it so ids stay positive.
        self.next_id = self.next_id.max(1);
        let id = StudentId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Adds a blank student.
    pub fn add(&mut self) -> StudentId {
        let id = self.allocate_id();
        self.students.push(Student::new(id));
        id
    }

    /// Adds a student with the given details.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        number: Option<u32>,
        tags: impl IntoIterator<Item = TagId>,
    ) -> StudentId {
        let id = self.allocate_id();
        let mut student = Student::new(id).with_name(name).with_tags(tags);
        student.number = number;
        self.students.push(student);
        id
    }

    /// Replaces name, number and tags. Returns `false` for an unknown id.
    pub fn update(
        &mut self,
        id: StudentId,
        name: impl Into<String>,
        number: Option<u32>,
        tags: Vec<TagId>,
    ) -> bool {
        match self.get_mut(id) {
            Some(student) => {
                student.name = name.into();
                student.number = number;
                student.tags = tags;
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, id: StudentId) -> Option<Student> {
        let index = self.students.iter().position(|s| s.id == id)?;
        Some(self.students.remove(index))
    }

    pub fn get(&self, id: StudentId) -> Option<&Student> {
        self.students.iter().find(|s| s.id == id)
    }

    pub fn get_mut(&mut self, id: StudentId) -> Option<&mut Student> {
        self.students.iter_mut().find(|s| s.id == id)
    }

    pub fn contains(&self, id: StudentId) -> bool {
        self.get(id).is_some()
    }

    pub fn students(&self) -> &[Student] {
        &self.students
    }

    pub fn ids(&self) -> Vec<StudentId> {
        self.students.iter().map(|s| s.id).collect()
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    pub fn clear(&mut self) {
        self.students.clear();
    }

    /// Grows or shrinks the roster to `target` students.
    ///
    /// Growth appends blank students. Shrinking removes blank students
    /// only, oldest first; returns `false` when there were not enough
    /// blank students to reach `target` (all of them are still removed).
    pub fn set_count(&mut self, target: usize) -> bool {
        let current = self.students.len();
        if target >= current {
            for _ in current..target {
                self.add();
            }
            return true;
        }

        let excess = current - target;
        let blank: Vec<StudentId> = self
            .students
            .iter()
            .filter(|s| s.is_blank())
            .map(|s| s.id)
            .take(excess)
            .collect();
        let enough = blank.len() == excess;
        self.students.retain(|s| !blank.contains(&s.id));
        enough
    }

    /// Drops `tag` from every student.
    pub fn remove_tag_everywhere(&mut self, tag: TagId) {
        for student in &mut self.students {
            student.tags.retain(|&t| t != tag);
        }
    }

    /// Display order: students without a number first, then by number.
    pub fn sorted(&self) -> Vec<&Student> {
        let mut out: Vec<&Student> = self.students.iter().collect();
        out.sort_by_key(|s| s.number.map_or((0, 0), |n| (1, n)));
        out
    }
}
