use modelmap_core::{FieldTag, Meta};

/// What a save resolves to, based on the record's key fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scenario {
    /// The store assigns the key; insert and read it back.
    Insert,

    /// The store-assigned key is known; update the existing row.
    Update,

    /// The key is caller-assigned; insert or overwrite on conflict.
    Upsert,
}

impl Scenario {
    /// Classifies a save of the record described by `meta`.
    ///
    /// The first primary-key field in declaration order decides. Records
    /// without a primary key fall back to their first unique field. Returns
    /// `None` when the record has neither.
    pub fn classify(meta: &Meta<'_>) -> Option<Scenario> {
        Scenario::from_keys(
            meta.fields()
                .iter()
                .map(|field| (field.tag, field.is_present())),
        )
    }

    /// Classifies from `(tag, is_present)` pairs in declaration order.
    pub(crate) fn from_keys(
        fields: impl IntoIterator<Item = (FieldTag<'static>, bool)>,
    ) -> Option<Scenario> {
        let mut unique = None;

        for (tag, present) in fields {
            if tag.primary_key {
                return Some(Scenario::decide(&tag, present));
            }

            if tag.unique && unique.is_none() {
                unique = Some((tag, present));
            }
        }

        unique.map(|(tag, present)| Scenario::decide(&tag, present))
    }

    fn decide(tag: &FieldTag<'_>, present: bool) -> Scenario {
        match (present, tag.sequence) {
            (true, true) => Scenario::Update,
            (false, true) => Scenario::Insert,
            (_, false) => Scenario::Upsert,
        }
    }
}
