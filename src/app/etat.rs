//! src/app/etat.rs
//!
//! État UI (sans vue, sans évaluation).
//!
//! Rôle : contenir l’état de la calculatrice (corps choisi, format, entrée,
//! résultats, erreur, digits, démarche, panneaux série / symétries) et offrir
//! des opérations simples (C/CLR/AC) sans logique d’affichage.
//!
//! Contrats :
//! - Aucune évaluation ici (pas de parsing, pas d’arithmétique).
//! - Actions déterministes, sans effet de bord caché.
//! - Bornes sur ΣLocal (digits) et sur la profondeur de série.

use crate::noyau::FormatNombre;

/// Précision ΣLocal par défaut (lecture décimale du plongement).
pub const DIGITS_DEFAUT: usize = 10;

/// Plongement f64 : au-delà de 15 décimales, la lecture n’a plus de sens.
pub const DIGITS_MAX: usize = 15;

/// Profondeur de la série dorée affichée par défaut (8 termes).
pub const PROFONDEUR_DEFAUT: usize = 4;

/// Garde-fou : la longueur croît comme Fibonacci (profondeur 12 => 377 termes).
pub const PROFONDEUR_MAX: usize = 12;

/// Nombre de rotations du groupe icosaédrique.
pub const NB_ROTATIONS: usize = 60;

/// Corps dans lequel on évalue l’entrée.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CorpsChoisi {
    #[default]
    Dore,
    RacineDeux,
}

impl CorpsChoisi {
    pub fn libelle(self) -> &'static str {
        match self {
            CorpsChoisi::Dore => "Q(φ)",
            CorpsChoisi::RacineDeux => "Q(√2)",
        }
    }

    /// Texte inséré par le bouton “générateur”.
    pub fn generateur(self) -> &'static str {
        match self {
            CorpsChoisi::Dore => "φ",
            CorpsChoisi::RacineDeux => "√2",
        }
    }
}

#[derive(Clone, Default, Debug)]
pub struct Demarche {
    pub jetons: String,
    pub rpn: String,
    pub triplet: String,
    pub note: String,
}

/// Panneau “série dorée” : mot + sommes partielles, déjà formatés.
#[derive(Clone, Default, Debug)]
pub struct PanneauSerie {
    pub profondeur: usize,
    pub mot: String,
    pub termes: Vec<String>,
}

/// Panneau “symétries” : une rotation et l’image des trois axes.
#[derive(Clone, Default, Debug)]
pub struct PanneauSymetrie {
    pub index: usize,
    pub quaternion: String,
    pub images: Vec<String>,
}

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- paramètres du corps ---
    pub corps: CorpsChoisi,
    pub format: FormatNombre,

    // --- entrée utilisateur ---
    pub entree: String,

    // --- sorties ---
    pub exact: String,       // affichage EXACT (format choisi)
    pub lecture: String,     // ΣLocal (plongement, digits décimales)
    pub erreur: String,      // message d’erreur (si parsing/éval échoue)
    pub lecture_dispo: bool, // false si vide / erreur

    // --- démarche (panneau d’explication) ---
    pub demarche: Demarche,

    // --- panneaux (corps doré) ---
    pub serie: PanneauSerie,
    pub symetrie: PanneauSymetrie,

    // --- paramètres ---
    pub digits: usize, // précision ΣLocal

    // --- UX ---
    // Permet à vue.rs de redonner le focus à l’entrée après un clic sur un bouton.
    pub focus_entree: bool,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            corps: CorpsChoisi::default(),
            format: FormatNombre::default(),
            entree: String::new(),
            exact: String::new(),
            lecture: String::new(),
            erreur: String::new(),
            lecture_dispo: false, // au démarrage : rien à lire
            demarche: Demarche::default(),
            serie: PanneauSerie {
                profondeur: PROFONDEUR_DEFAUT,
                ..Default::default()
            },
            symetrie: PanneauSymetrie::default(),
            digits: DIGITS_DEFAUT,
            focus_entree: true, // au lancement, on veut pouvoir taper tout de suite
        }
    }
}

impl AppCalc {
    /* ------------------------ Actions “boutons” (état seulement) ------------------------ */

    /// AC : remise à zéro totale (entrée + résultats + digits par défaut).
    /// Le corps et le format choisis sont conservés.
    pub fn reset_total(&mut self) {
        self.entree.clear();
        self.clear_resultats();
        self.digits = DIGITS_DEFAUT;
        self.focus_entree = true;
    }

    /// C : effacer seulement l’entrée (sans toucher aux résultats).
    pub fn clear_entree(&mut self) {
        self.entree.clear();
        self.focus_entree = true;
    }

    fn clear_demarche(&mut self) {
        self.demarche = Demarche::default();
    }

    /// CLR : effacer résultats + erreur + démarche (sans toucher à l’entrée).
    pub fn clear_resultats(&mut self) {
        self.exact.clear();
        self.lecture.clear();
        self.erreur.clear();
        self.lecture_dispo = false;
        self.clear_demarche();
        self.focus_entree = true;
    }

    /// Changer de corps : un résultat calculé dans l’autre corps n’a plus de sens.
    pub fn set_corps(&mut self, corps: CorpsChoisi) {
        if self.corps != corps {
            self.corps = corps;
            self.clear_resultats();
        }
        self.focus_entree = true;
    }

    /// Changer de format : l’affichage courant devient périmé, on le vide.
    pub fn set_format(&mut self, format: FormatNombre) {
        if self.format != format {
            self.format = format;
            self.exact.clear();
        }
        self.focus_entree = true;
    }

    /// Utilitaire : placer une erreur.
    ///
    /// Choix UX :
    /// - On CONSERVE `exact` (dernier résultat) pour ne pas “effacer l’écran” sur une faute.
    /// - On coupe ΣLocal + démarche (non fiable si l’évaluation échoue).
    pub fn set_erreur(&mut self, msg: impl Into<String>) {
        self.erreur = msg.into();

        self.lecture.clear();
        self.lecture_dispo = false;

        self.clear_demarche();

        self.focus_entree = true;
    }

    /// Utilitaire : déposer un résultat complet (EXACT + lecture + démarche).
    pub fn set_resultats(&mut self, exact: impl Into<String>, lecture: String, demarche: Demarche) {
        self.erreur.clear();
        self.exact = exact.into();
        self.demarche = demarche;

        self.lecture_dispo = !lecture.is_empty();
        self.lecture = lecture;

        self.focus_entree = true;
    }

    /// Garde-fou : limite digits.
    pub fn set_digits(&mut self, digits: usize) {
        self.digits = digits.min(DIGITS_MAX);
        self.focus_entree = true;
    }

    /// Garde-fou : limite la profondeur de série.
    pub fn set_profondeur(&mut self, profondeur: usize) {
        self.serie.profondeur = profondeur.min(PROFONDEUR_MAX);
    }

    /// Index de rotation ramené dans [0, 60).
    pub fn set_rotation(&mut self, index: usize) {
        self.symetrie.index = index % NB_ROTATIONS;
    }
}
