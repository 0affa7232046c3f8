use std::sync::RwLock;
use std::sync::atomic::{AtomicI32, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use domain::student::{
    Admission, Guardian, NewAdmission, NewGuardian, NewStudent, NewStudentFee, StudentDetails,
    StudentFee,
};
use domain::{CrudRepository, StorageError, Student, StudentRepository};

use super::in_memory::InMemoryRepository;

#[derive(Default)]
struct Children {
    admissions: Vec<Admission>,
    guardians: Vec<Guardian>,
    fees: Vec<StudentFee>,
}

/// Students plus their child rows; deleting a student drops its children.
pub struct InMemoryStudentRepository {
    students: InMemoryRepository<Student>,
    children: RwLock<Children>,
    next_child_id: AtomicI32,
}

impl Default for InMemoryStudentRepository {
    fn default() -> Self {
        Self {
            students: InMemoryRepository::new(),
            children: RwLock::new(Children::default()),
            next_child_id: AtomicI32::new(1),
        }
    }
}

impl InMemoryStudentRepository {
    pub fn new() -> Self {
        Self::default()
    }

    async fn ensure_student(&self, student_id: i32) -> Result<(), StorageError> {
        match self.students.get(student_id).await? {
            Some(_) => Ok(()),
            None => Err(StorageError::Database(format!(
                "student {student_id} does not exist"
            ))),
        }
    }

    fn with_children<T>(&self, f: impl FnOnce(&mut Children) -> T) -> Result<T, StorageError> {
        let mut children = self
            .children
            .write()
            .map_err(|_| StorageError::Database("in-memory store lock poisoned".to_string()))?;
        Ok(f(&mut children))
    }

    fn child_id(&self) -> i32 {
        self.next_child_id.fetch_add(1, Ordering::SeqCst)
    }
}

#[async_trait]
impl CrudRepository<Student> for InMemoryStudentRepository {
    async fn get(&self, id: i32) -> Result<Option<Student>, StorageError> {
        self.students.get(id).await
    }

    async fn get_all(&self) -> Result<Vec<Student>, StorageError> {
        self.students.get_all().await
    }

    async fn create(&self, record: NewStudent) -> Result<Student, StorageError> {
        self.students.create(record).await
    }

    async fn bulk_create(&self, records: Vec<NewStudent>) -> Result<bool, StorageError> {
        self.students.bulk_create(records).await
    }

    async fn update(&self, record: Student) -> Result<Student, StorageError> {
        self.students.update(record).await
    }

    async fn delete(&self, record: &Student) -> Result<bool, StorageError> {
        let deleted = self.students.delete(record).await?;
        if deleted {
            let id = record.id;
            self.with_children(|c| {
                c.admissions.retain(|a| a.student_id != id);
                c.guardians.retain(|g| g.student_id != id);
                c.fees.retain(|f| f.student_id != id);
            })?;
        }
        Ok(deleted)
    }
}

#[async_trait]
impl StudentRepository for InMemoryStudentRepository {
    async fn details(&self, id: i32) -> Result<Option<StudentDetails>, StorageError> {
        let Some(student) = self.students.get(id).await? else {
            return Ok(None);
        };
        self.with_children(|c| {
            Some(StudentDetails {
                student,
                admissions: c.admissions.iter().filter(|a| a.student_id == id).cloned().collect(),
                guardians: c.guardians.iter().filter(|g| g.student_id == id).cloned().collect(),
                fees: c.fees.iter().filter(|f| f.student_id == id).cloned().collect(),
            })
        })
    }

    async fn add_admission(
        &self,
        student_id: i32,
        new: NewAdmission,
    ) -> Result<Admission, StorageError> {
        self.ensure_student(student_id).await?;
        let admission = Admission::assemble(self.child_id(), student_id, new, Utc::now());
        self.with_children(|c| c.admissions.push(admission.clone()))?;
        Ok(admission)
    }

    async fn add_guardian(
        &self,
        student_id: i32,
        new: NewGuardian,
    ) -> Result<Guardian, StorageError> {
        self.ensure_student(student_id).await?;
        let guardian = Guardian::assemble(self.child_id(), student_id, new, Utc::now());
        self.with_children(|c| c.guardians.push(guardian.clone()))?;
        Ok(guardian)
    }

    async fn add_fee(
        &self,
        student_id: i32,
        new: NewStudentFee,
    ) -> Result<StudentFee, StorageError> {
        self.ensure_student(student_id).await?;
        let fee = StudentFee::assemble(self.child_id(), student_id, new, Utc::now());
        self.with_children(|c| c.fees.push(fee.clone()))?;
        Ok(fee)
    }
}
