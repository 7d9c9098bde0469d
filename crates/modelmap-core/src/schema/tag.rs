use std::fmt;

/// Column semantics decoded from a field's tag string.
///
/// A tag is a list of `;`-terminated tokens. Each token is either a bare
/// three-letter flag or a three-letter key followed by `~` and a value:
///
/// ```text
/// col~id;prk;seq;
/// col~author_id;frk~authors.id;req;
/// ```
///
/// | token   | meaning                                    |
/// |---------|--------------------------------------------|
/// | `col~x` | column name                                |
/// | `frk~x` | foreign key reference                      |
/// | `seq`   | value is assigned by the store (sequence)  |
/// | `prk`   | primary key (part)                         |
/// | `req`   | required                                   |
/// | `unq`   | unique                                     |
/// | `cat`   | created-at timestamp                       |
/// | `uat`   | updated-at timestamp                       |
/// | `dat`   | deleted-at timestamp (soft delete)         |
/// | `ign`   | ignored by the mapper                      |
///
/// Unknown or malformed tokens are skipped. A field whose tag has no column
/// name is unmapped.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldTag<'a> {
    pub column: &'a str,
    pub foreign_key: Option<&'a str>,
    pub sequence: bool,
    pub primary_key: bool,
    pub required: bool,
    pub unique: bool,
    pub created_at: bool,
    pub updated_at: bool,
    pub deleted_at: bool,
    pub ignored: bool,
}

impl<'a> FieldTag<'a> {
    /// Decodes `tag` in one left-to-right pass. Column and foreign key
    /// values borrow from `tag`.
    pub fn parse(tag: &'a str) -> FieldTag<'a> {
        let mut field = FieldTag::default();

        if tag.len() < 3 {
            return field;
        }

        for token in tag.split(';') {
            let Some(key) = token.get(..3) else {
                continue;
            };
            let rest = &token[3..];

            if rest.is_empty() {
                match key {
                    "seq" => field.sequence = true,
                    "prk" => field.primary_key = true,
                    "req" => field.required = true,
                    "unq" => field.unique = true,
                    "cat" => field.created_at = true,
                    "uat" => field.updated_at = true,
                    "dat" => field.deleted_at = true,
                    "ign" => field.ignored = true,
                    _ => {}
                }
                continue;
            }

            let Some(value) = rest.strip_prefix('~') else {
                continue;
            };

            match key {
                "col" => field.column = value,
                "frk" if !value.is_empty() => field.foreign_key = Some(value),
                _ => {}
            }
        }

        field
    }

    /// Returns `true` if statements include this field.
    pub fn is_mapped(&self) -> bool {
        !self.ignored && !self.column.is_empty()
    }

    /// Returns `true` for created, updated, and deleted timestamps.
    pub fn is_system(&self) -> bool {
        self.created_at || self.updated_at || self.deleted_at
    }
}

impl fmt::Display for FieldTag<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.column.is_empty() {
            write!(f, "col~{};", self.column)?;
        }

        if let Some(foreign_key) = self.foreign_key {
            write!(f, "frk~{foreign_key};")?;
        }

        let flags = [
            (self.sequence, "seq;"),
            (self.primary_key, "prk;"),
            (self.required, "req;"),
            (self.unique, "unq;"),
            (self.created_at, "cat;"),
            (self.updated_at, "uat;"),
            (self.deleted_at, "dat;"),
            (self.ignored, "ign;"),
        ];

        for (set, token) in flags {
            if set {
                f.write_str(token)?;
            }
        }

        Ok(())
    }
}
