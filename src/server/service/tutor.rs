use sea_orm::{ActiveValue::Set, DatabaseConnection};

use crate::{
    model::tutor::TutorRequestDto,
    server::{
        data::{tutor_request::TutorRequestRepository, user::UserRepository},
        error::{tutor::TutorError, Error},
        storage::{FileStore, UploadedFile},
    },
};

pub struct TutorService<'a> {
    db: &'a DatabaseConnection,
    storage: &'a FileStore,
}

impl<'a> TutorService<'a> {
    pub fn new(db: &'a DatabaseConnection, storage: &'a FileStore) -> Self {
        Self { db, storage }
    }

    /// Files the student's signed request document and records the request.
    pub async fn submit(
        &self,
        student_id: i32,
        title: String,
        document: UploadedFile,
    ) -> Result<entity::tutor_request::Model, Error> {
        let tutor_request_repository = TutorRequestRepository::new(self.db);

        if title.trim().is_empty() {
            return Err(Error::ValidationError(
                "El título es obligatorio".to_string(),
            ));
        }

        let reference = self
            .storage
            .store("tutor_requests", &format!("solicitud_{student_id}_"), &document)
            .await?;

        let request = tutor_request_repository
            .create(student_id, title, reference)
            .await?;

        Ok(request)
    }

    pub async fn list_for_student(
        &self,
        student_id: i32,
    ) -> Result<Vec<TutorRequestDto>, Error> {
        let tutor_request_repository = TutorRequestRepository::new(self.db);

        let requests = tutor_request_repository.list_for_student(student_id).await?;

        Ok(requests.into_iter().map(TutorRequestDto::from).collect())
    }

    /// Every request on record, enriched with the owning student for the
    /// admin queue.
    pub async fn list_all(&self) -> Result<Vec<TutorRequestDto>, Error> {
        let tutor_request_repository = TutorRequestRepository::new(self.db);
        let user_repository = UserRepository::new(self.db);

        let requests = tutor_request_repository.list_all().await?;

        let mut rows = Vec::with_capacity(requests.len());
        for request in requests {
            let student = user_repository.get(request.student_id).await?;
            let student_id = request.student_id;

            let mut dto = TutorRequestDto::from(request);
            dto.student_id = Some(student_id);
            dto.student_name = student.as_ref().map(|s| s.name.clone());
            dto.student_email = student.map(|s| s.email);
            rows.push(dto);
        }

        Ok(rows)
    }

    /// Attaches the acceptance memo the liaison office issues once a tutor
    /// signs off.
    pub async fn attach_memo(
        &self,
        request_id: i32,
        memo: UploadedFile,
    ) -> Result<entity::tutor_request::Model, Error> {
        let tutor_request_repository = TutorRequestRepository::new(self.db);

        let request = tutor_request_repository
            .get(request_id)
            .await?
            .ok_or(TutorError::NotFound(request_id))?;

        let reference = self
            .storage
            .store("memos", &format!("memo_{request_id}_"), &memo)
            .await?;

        let mut active: entity::tutor_request::ActiveModel = request.into();
        active.memo_reference = Set(Some(reference));

        let updated = tutor_request_repository.update(active).await?;

        Ok(updated)
    }
}
