//! NoteStore — the in-memory, ordered note collection.
//!
//! All reads hand out clones; mutations run under a single lock so id
//! assignment and in-place replacement cannot interleave.

use crate::error::NoteError;
use notes_types::{CreateNoteRequest, Note, UpdateNoteRequest};
use parking_lot::Mutex;

pub struct NoteStore {
    notes: Mutex<Vec<Note>>,
}

impl Default for NoteStore {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl NoteStore {
    pub fn new(notes: Vec<Note>) -> Self {
        Self {
            notes: Mutex::new(notes),
        }
    }

    /// Store pre-populated with the three startup notes
    pub fn with_seed_notes() -> Self {
        let seed = [
            (1, "HTML is easy", true),
            (2, "CSS is hard", false),
            (3, "JavaScript is fun", true),
        ];
        Self::new(
            seed.into_iter()
                .map(|(id, content, important)| Note {
                    id,
                    content: content.to_string(),
                    important,
                })
                .collect(),
        )
    }

    pub fn list(&self) -> Vec<Note> {
        self.notes.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.notes.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.lock().is_empty()
    }

    pub fn get(&self, id: u64) -> Result<Note, NoteError> {
        self.notes
            .lock()
            .iter()
            .find(|note| note.id == id)
            .cloned()
            .ok_or(NoteError::NotFound(id))
    }

    /// Append a new note with id `max + 1` (or 1 for an empty store)
    pub fn create(&self, req: CreateNoteRequest) -> Result<Note, NoteError> {
        let content = match req.content {
            Some(c) if !c.is_empty() => c,
            _ => return Err(NoteError::ContentMissing),
        };

        let mut notes = self.notes.lock();
        let id = notes.iter().map(|n| n.id).max().map_or(1, |max| max + 1);
        let note = Note {
            id,
            content,
            important: req.important.unwrap_or(false),
        };
        notes.push(note.clone());

        log::debug!("[NoteStore] Created note {}", id);
        Ok(note)
    }

    /// Replace the note with `id` in place.
    ///
    /// An empty `content` keeps the old content so a stored note never ends
    /// up empty. `important` is applied whenever present, including `false`.
    pub fn update(&self, id: u64, req: UpdateNoteRequest) -> Result<Note, NoteError> {
        let mut notes = self.notes.lock();
        let slot = notes
            .iter_mut()
            .find(|note| note.id == id)
            .ok_or(NoteError::NotFound(id))?;

        let updated = Note {
            id: slot.id,
            content: match req.content {
                Some(c) if !c.is_empty() => c,
                _ => slot.content.clone(),
            },
            important: req.important.unwrap_or(slot.important),
        };
        *slot = updated.clone();

        log::debug!("[NoteStore] Updated note {}", id);
        Ok(updated)
    }
}
