// Rust guideline compliant 2026-10-16

//! Implementation of the `patitas admin` commands.
//!
//! Staff operations over the available list: listing by shelter, creating
//! records and editing them.

use anyhow::Result;
use patitas_app::{AppError, LifecycleManager, Snapshot, View};
use patitas_core::{query, RecordDraft, RecordId, Sex, Species};

use super::Context;

/// Form fields for creating or editing a record.
///
/// On edit, omitted fields keep their current value.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct DraftArgs {
    /// Name of the animal
    #[arg(long)]
    pub name: Option<String>,

    /// Species (Canina or Felina)
    #[arg(long)]
    pub species: Option<String>,

    /// Sex (Hembra or Macho)
    #[arg(long)]
    pub sex: Option<String>,

    /// Age, e.g. "2 años", "9 meses", "10 días"
    #[arg(long)]
    pub age: Option<String>,

    /// Description prose
    #[arg(long)]
    pub description: Option<String>,

    /// Vaccinations up to date (true/false)
    #[arg(long)]
    pub vaccinated: Option<bool>,

    /// Neutered (true/false)
    #[arg(long)]
    pub neutered: Option<bool>,

    /// Contact phone
    #[arg(long)]
    pub phone: Option<String>,

    /// Shelter code
    #[arg(long)]
    pub shelter: Option<String>,

    /// URL of an already hosted image
    #[arg(long)]
    pub image_url: Option<String>,
}

impl DraftArgs {
    /// Overlays the provided fields onto `draft`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the species or sex is not recognised.
    pub fn apply_to(self, draft: &mut RecordDraft) -> std::result::Result<(), AppError> {
        if let Some(species) = self.species {
            draft.species = Some(species.parse::<Species>()?);
        }
        if let Some(sex) = self.sex {
            draft.sex = Some(sex.parse::<Sex>()?);
        }

        let text_fields = [
            (self.name, &mut draft.name),
            (self.age, &mut draft.age),
            (self.description, &mut draft.description),
            (self.phone, &mut draft.contact_phone),
            (self.shelter, &mut draft.shelter_code),
            (self.image_url, &mut draft.image_url),
        ];
        for (value, field) in text_fields {
            if let Some(value) = value {
                *field = value;
            }
        }

        if let Some(vaccinated) = self.vaccinated {
            draft.vaccinated = vaccinated;
        }
        if let Some(neutered) = self.neutered {
            draft.neutered = neutered;
        }
        Ok(())
    }
}

/// Lists available records, optionally for one shelter.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be created.
pub async fn list(ctx: &Context, shelter: Option<String>) -> Result<()> {
    let store = ctx.store()?;
    let snapshot = Snapshot::load(&store, View::Available).await;

    let records = query::by_shelter_code(snapshot.records(), shelter.as_deref());
    ctx.print_records(&snapshot, &records);
    Ok(())
}

/// Creates a record from the given fields.
///
/// # Errors
///
/// Returns `InvalidInput` naming the first missing or invalid field, or the
/// store's error if the request fails.
pub async fn create(ctx: &Context, args: DraftArgs) -> Result<()> {
    let mut draft = RecordDraft::default();
    args.apply_to(&mut draft)?;

    let manager = LifecycleManager::new(ctx.store()?);
    let mut snapshot = Snapshot::empty(View::Available);
    manager.register(&mut snapshot, &draft).await?;

    let message = format!("Registered {}", draft.name.trim());
    println!("{}", ctx.formatter.format_success(&message, None));
    Ok(())
}

/// Edits an available record, keeping fields that were not given.
///
/// # Errors
///
/// Returns `InvalidInput` if the record is not in the available list or the
/// edited draft is invalid, or the store's error if the request fails.
pub async fn edit(ctx: &Context, id: String, args: DraftArgs) -> Result<()> {
    let id = RecordId::new(id);
    let manager = LifecycleManager::new(ctx.store()?);
    let mut snapshot = Snapshot::load(manager.store(), View::Available).await;
    if let Some(err) = snapshot.take_error() {
        return Err(err.into());
    }

    let record = snapshot
        .find(&id)
        .ok_or_else(|| AppError::InvalidInput(format!("Record {id} is not in the available list")))?;
    let mut draft = RecordDraft::from_record(record);
    args.apply_to(&mut draft)?;

    manager.edit(&mut snapshot, &id, &draft).await?;

    let updated = snapshot.find(&id);
    let message = format!("Updated {} ({id})", draft.name.trim());
    println!("{}", ctx.formatter.format_success(&message, updated));
    Ok(())
}
