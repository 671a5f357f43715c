//! Conjugation repository: slot lookup, upsert, table save and decks.

use limud_core::conjugation::unpack;
use limud_core::entities::{ConjugatedVerb, ConjugationSlot};
use limud_core::enums::Binyan;
use limud_core::errors::CoreError;

use crate::error::DatabaseError;
use crate::helpers::{get_opt_string, opt_text, parse_enum, parse_opt_enum};
use crate::service::LimudService;

const SELECT_COLS: &str = "id, hebrew, binyan, tense, person, gender, number";

fn row_to_conjugation(row: &libsql::Row) -> Result<ConjugatedVerb, DatabaseError> {
    Ok(ConjugatedVerb {
        id: row.get(0)?,
        hebrew: get_opt_string(row, 1)?,
        slot: ConjugationSlot {
            binyan: parse_enum(&row.get::<String>(2)?)?,
            tense: parse_enum(&row.get::<String>(3)?)?,
            person: parse_opt_enum(row, 4)?,
            gender: parse_opt_enum(row, 5)?,
            number: parse_opt_enum(row, 6)?,
        },
    })
}

/// Slot columns as parameters `?1..=?5`.
fn slot_values(slot: &ConjugationSlot) -> Vec<libsql::Value> {
    vec![
        slot.binyan.as_str().into(),
        slot.tense.as_str().into(),
        opt_text(slot.person.map(|p| p.as_str())),
        opt_text(slot.gender.map(|g| g.as_str())),
        opt_text(slot.number.map(|n| n.as_str())),
    ]
}

impl LimudService {
    pub async fn get_conjugation(&self, id: i64) -> Result<ConjugatedVerb, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM conjugation WHERE id = ?1"),
                [id],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        row_to_conjugation(&row)
    }

    /// The row stored for `slot`, if any. Finding more than one is an
    /// `InvalidState`.
    pub async fn find_conjugation(
        &self,
        slot: &ConjugationSlot,
    ) -> Result<Option<ConjugatedVerb>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {SELECT_COLS} FROM conjugation \
                     WHERE binyan = ?1 AND tense = ?2 \
                     AND person IS ?3 AND gender IS ?4 AND number IS ?5"
                ),
                libsql::params_from_iter(slot_values(slot)),
            )
            .await?;

        let Some(row) = rows.next().await? else {
            return Ok(None);
        };
        let found = row_to_conjugation(&row)?;
        if rows.next().await?.is_some() {
            return Err(DatabaseError::InvalidState(format!(
                "more than one conjugation stored for {} {}",
                slot.binyan, slot.tense
            )));
        }
        Ok(Some(found))
    }

    /// Set the Hebrew text of `slot`, creating the row when missing.
    pub async fn upsert_conjugation(
        &self,
        slot: &ConjugationSlot,
        hebrew: Option<&str>,
    ) -> Result<ConjugatedVerb, DatabaseError> {
        if let Some(existing) = self.find_conjugation(slot).await? {
            self.db()
                .conn()
                .execute(
                    "UPDATE conjugation SET hebrew = ?1 WHERE id = ?2",
                    libsql::params_from_iter(vec![
                        opt_text(hebrew),
                        libsql::Value::Integer(existing.id),
                    ]),
                )
                .await?;
            tracing::debug!(id = existing.id, "updated conjugation");
            return Ok(ConjugatedVerb {
                hebrew: hebrew.map(String::from),
                ..existing
            });
        }

        let mut params = slot_values(slot);
        params.insert(0, opt_text(hebrew));
        self.db()
            .conn()
            .execute(
                "INSERT INTO conjugation (hebrew, binyan, tense, person, gender, number) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                libsql::params_from_iter(params),
            )
            .await?;
        let id = self.db().conn().last_insert_rowid();
        tracing::debug!(id, "added conjugation");

        Ok(ConjugatedVerb {
            id,
            hebrew: hebrew.map(String::from),
            slot: *slot,
        })
    }

    /// Save a whole conjugation table for `binyan`, keyed by packed cell code.
    ///
    /// Every key is decoded before anything is written, and the cells are
    /// written in one transaction: either the whole table is saved or none
    /// of it. Empty text clears a cell. Returns the number of cells saved.
    pub async fn save_conjugation_table(
        &self,
        binyan: Binyan,
        cells: &[(u16, String)],
    ) -> Result<usize, DatabaseError> {
        let slots = cells
            .iter()
            .map(|(key, hebrew)| {
                let form = unpack(*key).ok_or_else(|| CoreError::UnknownVariant {
                    kind: "conjugation key",
                    value: key.to_string(),
                })?;
                let text = hebrew.trim();
                Ok((
                    ConjugationSlot::from_key(binyan, form),
                    (!text.is_empty()).then_some(text),
                ))
            })
            .collect::<Result<Vec<_>, DatabaseError>>()?;

        let tx = self.db().conn().transaction().await?;
        for (slot, hebrew) in &slots {
            if let Err(error) = self.upsert_conjugation(slot, *hebrew).await {
                tx.rollback().await?;
                tracing::warn!(%binyan, %error, "conjugation table save rolled back");
                return Err(error);
            }
        }
        tx.commit().await?;

        tracing::info!(%binyan, cells = slots.len(), "saved conjugation table");
        Ok(slots.len())
    }

    pub async fn list_conjugations(
        &self,
        binyan: Binyan,
    ) -> Result<Vec<ConjugatedVerb>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM conjugation WHERE binyan = ?1 ORDER BY id"),
                [binyan.as_str()],
            )
            .await?;

        let mut verbs = Vec::new();
        while let Some(row) = rows.next().await? {
            verbs.push(row_to_conjugation(&row)?);
        }
        Ok(verbs)
    }

    /// Stored representative forms of every binyan, in binyan order.
    pub async fn list_representative_forms(&self) -> Result<Vec<ConjugatedVerb>, DatabaseError> {
        let mut verbs = Vec::new();
        for binyan in Binyan::ALL {
            for slot in ConjugationSlot::representative(binyan) {
                if let Some(verb) = self.find_conjugation(&slot).await? {
                    verbs.push(verb);
                }
            }
        }
        tracing::info!(count = verbs.len(), "collected representative forms");
        Ok(verbs)
    }
}
