//! Chybové typy analytického enginu.
//!
//! Chyby vstupu (chýbajúce stĺpce, málo riadkov, nečíselná hodnota) sa
//! vracajú volajúcemu bez zmeny a nikdy sa neopakujú.

use thiserror::Error;

/// Hlavný chybový typ knižnice.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    // ============ Chyby vstupných dát ============
    /// V hlavičke chýba aspoň jeden povinný stĺpec.
    #[error("missing required columns: {}", columns.join(", "))]
    MissingColumns {
        /// Všetky chýbajúce stĺpce v poradí povinnej sady.
        columns: Vec<String>,
    },

    /// Dataset má menej riadkov, ako vyžaduje konfigurácia.
    #[error("insufficient data: found {found} rows, at least {required} required")]
    InsufficientRows {
        /// Počet dátových riadkov.
        found: usize,
        /// Minimálny počet riadkov.
        required: usize,
    },

    /// Prvá nečíselná hodnota v niektorom z číselných stĺpcov.
    #[error("invalid numeric value in column '{column}' at row {row}: \"{value}\"")]
    InvalidNumericValue {
        /// Číslo riadku (od 1, bez hlavičky).
        row: usize,
        /// Názov stĺpca.
        column: String,
        /// Pôvodná hodnota tak, ako bola v súbore.
        value: String,
    },

    /// Čítačka CSV/JSON odmietla vstup.
    #[error("failed to parse input: {message}")]
    Parse {
        /// Popis chyby.
        message: String,
    },

    /// Factory nevie určiť loader pre daný formát.
    #[error("unknown data format: {format}")]
    UnknownFormat {
        /// Požadovaný alebo detekovaný formát.
        format: String,
    },

    // ============ Chyby konfigurácie a session ============
    /// Neplatná konfigurácia.
    #[error("invalid configuration: {message}")]
    InvalidConfig {
        /// Popis problému.
        message: String,
    },

    /// Operácia vyžaduje načítaný dataset.
    #[error("no dataset has been analyzed yet")]
    NoActiveAnalysis,

    /// Index do histórie mimo rozsahu.
    #[error("history entry {index} does not exist ({len} stored)")]
    HistoryIndexOutOfRange {
        /// Požadovaný index.
        index: usize,
        /// Počet uložených záznamov.
        len: usize,
    },

    /// Predikcia odmietla vstup.
    #[error(transparent)]
    Prediction(#[from] PredictionError),

    // ============ Výstup ============
    /// Zlyhal zápis reportu.
    #[error("failed to render report: {message}")]
    Render {
        /// Popis chyby.
        message: String,
    },

    /// Zlyhala (de)serializácia snapshotu alebo histórie.
    #[error("serialization failed: {message}")]
    Serialization {
        /// Popis chyby.
        message: String,
    },
}

/// Chyby vstupu predikcie. Nejde o chyby štatistiky, ale o validáciu
/// hodnôt, ktoré zadal používateľ.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PredictionError {
    /// Všetky tri kanály majú nulový rozpočet.
    #[error("enter a budget for at least one channel")]
    NoSpend,

    /// Záporný rozpočet pre daný kanál.
    #[error("{channel} budget cannot be negative")]
    NegativeSpend {
        /// Zobrazovaný názov kanála.
        channel: &'static str,
    },
}

/// `Result` s chybovým typom knižnice.
pub type Result<T, E = Error> = std::result::Result<T, E>;

impl Error {
    /// Vytvorí chybu `Parse`.
    #[must_use]
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    /// Vytvorí chybu `InvalidConfig`.
    #[must_use]
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Vytvorí chybu `Render`.
    #[must_use]
    pub fn render(message: impl Into<String>) -> Self {
        Self::Render {
            message: message.into(),
        }
    }

    /// Vytvorí chybu `Serialization`.
    #[must_use]
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization {
            message: message.into(),
        }
    }

    /// Či ide o chybu vstupných dát, ktorú treba zobraziť používateľovi.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::MissingColumns { .. }
                | Self::InsufficientRows { .. }
                | Self::InvalidNumericValue { .. }
                | Self::Parse { .. }
                | Self::Prediction(_)
        )
    }
}

impl From<csv::Error> for Error {
    fn from(e: csv::Error) -> Self {
        Self::parse(e.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::serialization(e.to_string())
    }
}
