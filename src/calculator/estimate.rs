// ============================================================================
// Enum : Estimate<T>
// ============================================================================
// Distingue "pas encore calculable" (saisie incomplète) d'un résultat
// réellement calculé, même quand ce résultat vaut zéro
//
// CONCEPT RUST : Enum générique
// - Estimate<T> fonctionne pour n'importe quel type de résultat
// - Comme Option<T>, mais les noms disent ce que l'UI doit afficher
// ============================================================================

/// Résultat d'un calcul qui peut attendre des saisies
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Estimate<T> {
    /// Il manque une saisie : l'UI affiche un placeholder
    Pending,

    /// Résultat calculé
    Ready(T),
}

impl<T> Estimate<T> {
    /// Vérifie si le résultat est calculé
    pub fn is_ready(&self) -> bool {
        matches!(self, Estimate::Ready(_))
    }

    /// Convertit en Option (consomme self)
    pub fn ready(self) -> Option<T> {
        match self {
            Estimate::Ready(value) => Some(value),
            Estimate::Pending => None,
        }
    }

    /// Transforme la valeur calculée
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Estimate<U> {
        match self {
            Estimate::Ready(value) => Estimate::Ready(f(value)),
            Estimate::Pending => Estimate::Pending,
        }
    }

    /// Valeur calculée ou la valeur donnée
    pub fn unwrap_or(self, default: T) -> T {
        self.ready().unwrap_or(default)
    }
}

impl<T: Default> Estimate<T> {
    /// Valeur calculée ou l'objet "zéro" du type
    ///
    /// Permet à l'UI d'afficher des zéros tant que la saisie est incomplète.
    pub fn unwrap_or_default(self) -> T {
        self.ready().unwrap_or_default()
    }
}

impl<T> From<Option<T>> for Estimate<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Estimate::Ready(value),
            None => Estimate::Pending,
        }
    }
}

// ============================================================================
// Tests unitaires
// ============================================================================
