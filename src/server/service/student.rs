//! Student profile: CV, experiences, and certifications.

use sea_orm::DatabaseConnection;

use crate::{
    model::user::{
        CertificationDto, ExperienceDto, NewCertificationDto, NewExperienceDto, ProfileDto,
    },
    server::{
        data::{
            certification::CertificationRepository, experience::ExperienceRepository,
            user::UserRepository,
        },
        error::{profile::ProfileError, Error},
        storage::{FileStore, UploadedFile},
    },
};

pub struct StudentService<'a> {
    db: &'a DatabaseConnection,
    storage: &'a FileStore,
}

impl<'a> StudentService<'a> {
    pub fn new(db: &'a DatabaseConnection, storage: &'a FileStore) -> Self {
        Self { db, storage }
    }

    pub async fn profile(&self, student_id: i32) -> Result<ProfileDto, Error> {
        let user_repository = UserRepository::new(self.db);
        let experience_repository = ExperienceRepository::new(self.db);
        let certification_repository = CertificationRepository::new(self.db);

        let user = user_repository
            .get(student_id)
            .await?
            .ok_or(ProfileError::StudentNotFound(student_id))?;

        let experiences = experience_repository
            .list_for_student(student_id)
            .await?
            .into_iter()
            .map(ExperienceDto::from)
            .collect();
        let certifications = certification_repository
            .list_for_student(student_id)
            .await?
            .into_iter()
            .map(CertificationDto::from)
            .collect();

        Ok(ProfileDto {
            id: user.id,
            name: user.name,
            email: user.email,
            role: user.role,
            cv_reference: user.cv_reference,
            experiences,
            certifications,
        })
    }

    /// Stores the student's CV and records its reference on their account.
    pub async fn upload_cv(&self, student_id: i32, file: UploadedFile) -> Result<String, Error> {
        let user_repository = UserRepository::new(self.db);

        let user = user_repository
            .get(student_id)
            .await?
            .ok_or(ProfileError::StudentNotFound(student_id))?;

        let reference = self
            .storage
            .store("cvs", &format!("cv_{student_id}_"), &file)
            .await?;

        user_repository.set_cv_reference(user, reference.clone()).await?;

        Ok(reference)
    }

    pub async fn add_experience(
        &self,
        student_id: i32,
        body: NewExperienceDto,
    ) -> Result<ExperienceDto, Error> {
        let experience_repository = ExperienceRepository::new(self.db);

        if body.title.trim().is_empty() || body.company.trim().is_empty() {
            return Err(Error::ValidationError(
                "Título y empresa son obligatorios".to_string(),
            ));
        }

        let experience = experience_repository
            .create(
                student_id,
                body.title,
                body.company,
                body.start_date,
                body.end_date,
                body.description,
            )
            .await?;

        Ok(experience.into())
    }

    pub async fn delete_experience(&self, student_id: i32, id: i32) -> Result<(), Error> {
        let experience_repository = ExperienceRepository::new(self.db);

        let experience = experience_repository
            .get(id)
            .await?
            .ok_or(ProfileError::EntryNotFound(id))?;

        if experience.student_id != student_id {
            return Err(ProfileError::NotOwner(id).into());
        }

        experience_repository.delete(id).await?;

        Ok(())
    }

    pub async fn add_certification(
        &self,
        student_id: i32,
        body: NewCertificationDto,
    ) -> Result<CertificationDto, Error> {
        let certification_repository = CertificationRepository::new(self.db);

        if body.title.trim().is_empty() || body.institution.trim().is_empty() {
            return Err(Error::ValidationError(
                "Título e institución son obligatorios".to_string(),
            ));
        }

        let certification = certification_repository
            .create(student_id, body.title, body.institution, body.year)
            .await?;

        Ok(certification.into())
    }

    pub async fn delete_certification(&self, student_id: i32, id: i32) -> Result<(), Error> {
        let certification_repository = CertificationRepository::new(self.db);

        let certification = certification_repository
            .get(id)
            .await?
            .ok_or(ProfileError::EntryNotFound(id))?;

        if certification.student_id != student_id {
            return Err(ProfileError::NotOwner(id).into());
        }

        certification_repository.delete(id).await?;

        Ok(())
    }
}
