//! Vocabulary repository: CRUD, favorites, filters and chapters.

use limud_core::entities::{AdjectiveForms, NounForms, VerbStems, Word, WordEntry, WordKind};
use limud_core::enums::Category;
use limud_core::fields::WordFields;

use crate::error::DatabaseError;
use crate::helpers::{get_opt_string, opt_integer, opt_text, parse_enum, parse_opt_enum};
use crate::service::LimudService;

/// Every column except `id`, in parameter order.
const DATA_COLS: &str = "hebrew, description, category, chapter, favorite, gender, \
     plural_absolute, singular_construct, plural_construct, \
     nifal, piel, pual, hifil, hofal, hitpael, \
     adjective_plural, adjective_feminine";

const DATA_PLACEHOLDERS: &str =
    "?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16, ?17";

const DATA_COL_COUNT: usize = 17;

/// Which words a listing returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WordFilter {
    #[default]
    All,
    Favorites,
    Category(Category),
    Chapter(i64),
}

fn row_to_word(row: &libsql::Row) -> Result<Word, DatabaseError> {
    let id: i64 = row.get(0)?;
    let category: Category = parse_enum(&row.get::<String>(3)?)?;

    let kind = match category {
        Category::Noun => WordKind::Noun(NounForms {
            gender: parse_opt_enum(row, 6)?.ok_or_else(|| {
                DatabaseError::InvalidState(format!("noun {id} has no gender"))
            })?,
            plural_absolute: get_opt_string(row, 7)?,
            singular_construct: get_opt_string(row, 8)?,
            plural_construct: get_opt_string(row, 9)?,
        }),
        Category::Verb => WordKind::Verb(VerbStems {
            nifal: get_opt_string(row, 10)?,
            piel: get_opt_string(row, 11)?,
            pual: get_opt_string(row, 12)?,
            hifil: get_opt_string(row, 13)?,
            hofal: get_opt_string(row, 14)?,
            hitpael: get_opt_string(row, 15)?,
        }),
        Category::Adjective => WordKind::Adjective(AdjectiveForms {
            plural: get_opt_string(row, 16)?,
            feminine: get_opt_string(row, 17)?,
        }),
        Category::Adverb => WordKind::Adverb,
        Category::Particle => WordKind::Particle,
    };

    Ok(Word {
        id,
        entry: WordEntry {
            hebrew: row.get(1)?,
            description: row.get(2)?,
            chapter: row.get::<Option<i64>>(4)?,
            favorite: row.get::<i64>(5)? != 0,
            kind,
        },
    })
}

/// Column values of `entry`, in [`DATA_COLS`] order.
fn entry_values(entry: &WordEntry) -> Vec<libsql::Value> {
    let mut values: Vec<libsql::Value> = vec![
        entry.hebrew.as_str().into(),
        entry.description.as_str().into(),
        entry.category().as_str().into(),
        opt_integer(entry.chapter),
        libsql::Value::Integer(i64::from(entry.favorite)),
    ];

    let (noun, stems, adjective) = match &entry.kind {
        WordKind::Noun(forms) => (Some(forms), None, None),
        WordKind::Verb(stems) => (None, Some(stems), None),
        WordKind::Adjective(forms) => (None, None, Some(forms)),
        WordKind::Adverb | WordKind::Particle => (None, None, None),
    };

    values.push(opt_text(noun.map(|n| n.gender.as_str())));
    values.push(opt_text(noun.and_then(|n| n.plural_absolute.as_deref())));
    values.push(opt_text(noun.and_then(|n| n.singular_construct.as_deref())));
    values.push(opt_text(noun.and_then(|n| n.plural_construct.as_deref())));

    values.push(opt_text(stems.and_then(|s| s.nifal.as_deref())));
    values.push(opt_text(stems.and_then(|s| s.piel.as_deref())));
    values.push(opt_text(stems.and_then(|s| s.pual.as_deref())));
    values.push(opt_text(stems.and_then(|s| s.hifil.as_deref())));
    values.push(opt_text(stems.and_then(|s| s.hofal.as_deref())));
    values.push(opt_text(stems.and_then(|s| s.hitpael.as_deref())));

    values.push(opt_text(adjective.and_then(|a| a.plural.as_deref())));
    values.push(opt_text(adjective.and_then(|a| a.feminine.as_deref())));

    debug_assert_eq!(values.len(), DATA_COL_COUNT);
    values
}

impl LimudService {
    pub async fn create_word(&self, entry: &WordEntry) -> Result<Word, DatabaseError> {
        self.db()
            .conn()
            .execute(
                &format!("INSERT INTO vocabulary ({DATA_COLS}) VALUES ({DATA_PLACEHOLDERS})"),
                libsql::params_from_iter(entry_values(entry)),
            )
            .await?;
        let id = self.db().conn().last_insert_rowid();

        tracing::info!(id, category = %entry.category(), "created word");
        Ok(Word {
            id,
            entry: entry.clone(),
        })
    }

    pub async fn get_word(&self, id: i64) -> Result<Word, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT id, {DATA_COLS} FROM vocabulary WHERE id = ?1"),
                [id],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        row_to_word(&row)
    }

    pub async fn list_words(&self, filter: WordFilter) -> Result<Vec<Word>, DatabaseError> {
        let (clause, params): (&str, Vec<libsql::Value>) = match filter {
            WordFilter::All => ("", Vec::new()),
            WordFilter::Favorites => ("WHERE favorite = 1", Vec::new()),
            WordFilter::Category(category) => {
                ("WHERE category = ?1", vec![category.as_str().into()])
            }
            WordFilter::Chapter(chapter) => {
                ("WHERE chapter = ?1", vec![libsql::Value::Integer(chapter)])
            }
        };

        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT id, {DATA_COLS} FROM vocabulary {clause} ORDER BY id"),
                libsql::params_from_iter(params),
            )
            .await?;

        let mut words = Vec::new();
        while let Some(row) = rows.next().await? {
            words.push(row_to_word(&row)?);
        }
        Ok(words)
    }

    pub async fn set_favorite(&self, id: i64, favorite: bool) -> Result<(), DatabaseError> {
        let changed = self
            .db()
            .conn()
            .execute(
                "UPDATE vocabulary SET favorite = ?1 WHERE id = ?2",
                libsql::params![i64::from(favorite), id],
            )
            .await?;
        if changed == 0 {
            return Err(DatabaseError::NoResult);
        }
        tracing::info!(id, favorite, "set favorite flag");
        Ok(())
    }

    /// Overwrite a stored word from raw form fields.
    ///
    /// Validation runs before anything is written; a rejected submission
    /// leaves the row unchanged.
    pub async fn apply_word_fields(
        &self,
        id: i64,
        fields: &WordFields,
    ) -> Result<Word, DatabaseError> {
        let mut word = self.get_word(id).await?;
        word.entry.apply_fields(fields)?;

        let set_clause = DATA_COLS
            .split(',')
            .enumerate()
            .map(|(i, col)| format!("{} = ?{}", col.trim(), i + 1))
            .collect::<Vec<_>>()
            .join(", ");
        let mut params = entry_values(&word.entry);
        params.push(libsql::Value::Integer(id));

        self.db()
            .conn()
            .execute(
                &format!(
                    "UPDATE vocabulary SET {set_clause} WHERE id = ?{}",
                    DATA_COL_COUNT + 1
                ),
                libsql::params_from_iter(params),
            )
            .await?;

        tracing::info!(id, "applied form fields to word");
        Ok(word)
    }

    pub async fn delete_word(&self, id: i64) -> Result<(), DatabaseError> {
        let changed = self
            .db()
            .conn()
            .execute("DELETE FROM vocabulary WHERE id = ?1", [id])
            .await?;
        if changed == 0 {
            return Err(DatabaseError::NoResult);
        }
        tracing::warn!(id, "deleted word");
        Ok(())
    }

    /// Distinct chapters with at least one word, ascending.
    pub async fn list_chapters(&self) -> Result<Vec<i64>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT DISTINCT chapter FROM vocabulary \
                 WHERE chapter IS NOT NULL ORDER BY chapter",
                (),
            )
            .await?;

        let mut chapters = Vec::new();
        while let Some(row) = rows.next().await? {
            chapters.push(row.get::<i64>(0)?);
        }
        Ok(chapters)
    }
}
