// Rust guideline compliant 2026-10-16

//! In-memory `AdoptionStore` shared by the integration tests.

#![allow(dead_code)]

use async_trait::async_trait;
use chrono::NaiveDate;
use patitas_app::{AdoptionStore, AppError, Result, View};
use patitas_core::codec;
use patitas_core::wire::RecordBatch;
use patitas_core::{
    Age, AnimalRecord, RecordId, Sex, Species, Status, Transition, ValidatedDraft,
};
use std::sync::Mutex;

#[derive(Debug, Default)]
struct Inner {
    records: Vec<AnimalRecord>,
    shelter_codes: Vec<String>,
    offline: bool,
    reject_with: Option<u16>,
    mutations: Vec<String>,
}

/// A store that keeps records in memory and logs every mutation call.
#[derive(Debug, Default)]
pub struct FakeStore {
    inner: Mutex<Inner>,
}

impl FakeStore {
    pub fn new(records: Vec<AnimalRecord>) -> Self {
        let store = Self::default();
        {
            let mut inner = store.inner.lock().unwrap();
            inner.records = records;
            inner.shelter_codes = vec!["REF1".to_string(), "REF2".to_string()];
        }
        store
    }

    /// Makes every call fail as if the network were down.
    pub fn set_offline(&self, offline: bool) {
        self.inner.lock().unwrap().offline = offline;
    }

    /// Makes every mutation fail with the given HTTP status.
    pub fn reject_mutations(&self, status: u16) {
        self.inner.lock().unwrap().reject_with = Some(status);
    }

    /// Changes a record's status without going through a mutation call.
    pub fn set_status(&self, id: &str, status: Status) {
        let mut inner = self.inner.lock().unwrap();
        if let Some(record) = inner.records.iter_mut().find(|r| r.id.as_str() == id) {
            record.status = status;
        }
    }

    pub fn mutations(&self) -> Vec<String> {
        self.inner.lock().unwrap().mutations.clone()
    }

    pub fn records(&self) -> Vec<AnimalRecord> {
        self.inner.lock().unwrap().records.clone()
    }

    fn check_online(inner: &Inner) -> Result<()> {
        if inner.offline {
            return Err(AppError::NetworkUnavailable("connection refused".to_string()));
        }
        Ok(())
    }

    fn check_mutation(inner: &mut Inner, call: String) -> Result<()> {
        Self::check_online(inner)?;
        inner.mutations.push(call);
        if let Some(status) = inner.reject_with {
            return Err(AppError::RemoteRejected {
                status,
                message: "Rechazado".to_string(),
            });
        }
        Ok(())
    }
}

fn record_from_draft(id: RecordId, draft: &ValidatedDraft, status: Status) -> AnimalRecord {
    AnimalRecord {
        id,
        name: draft.name.clone(),
        species: draft.species,
        sex: draft.sex,
        age: draft.age.clone(),
        shelter_code: draft.shelter_code.clone(),
        shelter_name: None,
        contact_phone: draft.contact_phone.clone(),
        image_url: draft.image_url.clone(),
        description: draft.description.clone(),
        vaccinated: draft.vaccinated,
        neutered: draft.neutered,
        markers: codec::decode_markers(&codec::encode(
            &draft.description,
            draft.vaccinated,
            draft.neutered,
        )),
        status,
        uploaded_on: None,
        adopted_on: None,
        returned_on: None,
        return_reason: None,
    }
}

#[async_trait]
impl AdoptionStore for FakeStore {
    async fn fetch_view(&self, view: View) -> Result<RecordBatch> {
        let inner = self.inner.lock().unwrap();
        Self::check_online(&inner)?;
        let records = inner
            .records
            .iter()
            .filter(|record| match view.implied_status() {
                Some(status) => record.status == status,
                None => true,
            })
            .cloned()
            .collect();
        Ok(RecordBatch {
            records,
            rejected: Vec::new(),
        })
    }

    async fn fetch_record(&self, id: &RecordId) -> Result<AnimalRecord> {
        let inner = self.inner.lock().unwrap();
        Self::check_online(&inner)?;
        inner
            .records
            .iter()
            .find(|record| &record.id == id)
            .cloned()
            .ok_or(AppError::RemoteRejected {
                status: 404,
                message: "Mascota no encontrada".to_string(),
            })
    }

    async fn shelter_codes(&self) -> Result<Vec<String>> {
        let inner = self.inner.lock().unwrap();
        Self::check_online(&inner)?;
        Ok(inner.shelter_codes.clone())
    }

    async fn create(&self, draft: &ValidatedDraft) -> Result<()> {
        let mut inner = self.inner.lock().unwrap();
        Self::check_mutation(&mut inner, format!("POST {}", draft.name))?;
        let id = RecordId::new((inner.records.len() + 1).to_string());
        inner
            .records
            .push(record_from_draft(id, draft, Status::Available));
        Ok(())
    }

    async fn update(&self, id: &RecordId, draft: &ValidatedDraft) -> Result<()> {
        let mut inner = self.inner.lock().unwrap();
        Self::check_mutation(&mut inner, format!("PUT {id}"))?;
        let record = inner
            .records
            .iter_mut()
            .find(|record| &record.id == id)
            .ok_or(AppError::RemoteRejected {
                status: 404,
                message: "Mascota no encontrada".to_string(),
            })?;
        *record = record_from_draft(id.clone(), draft, record.status);
        Ok(())
    }

    async fn apply_transition(
        &self,
        id: &RecordId,
        transition: Transition,
        today: NaiveDate,
    ) -> Result<()> {
        let mut inner = self.inner.lock().unwrap();
        Self::check_mutation(&mut inner, format!("PUT {id} {transition}"))?;
        let record = inner
            .records
            .iter_mut()
            .find(|record| &record.id == id)
            .ok_or(AppError::RemoteRejected {
                status: 404,
                message: "Mascota no encontrada".to_string(),
            })?;
        transition
            .apply(record, today)
            .map_err(|e| AppError::RemoteRejected {
                status: 409,
                message: e.to_string(),
            })
    }
}

pub fn record(id: &str, status: Status) -> AnimalRecord {
    AnimalRecord {
        id: RecordId::new(id),
        name: format!("Animal {id}"),
        species: Species::Canine,
        sex: Sex::Male,
        age: Age::parse("2 años").unwrap(),
        shelter_code: "REF1".to_string(),
        shelter_name: None,
        contact_phone: None,
        image_url: None,
        description: "Amigable".to_string(),
        vaccinated: true,
        neutered: false,
        markers: Vec::new(),
        status,
        uploaded_on: NaiveDate::from_ymd_opt(2024, 1, 10),
        adopted_on: None,
        returned_on: None,
        return_reason: None,
    }
}

pub fn fixed_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 9).unwrap()
}
