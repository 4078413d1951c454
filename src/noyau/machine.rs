// src/noyau/machine.rs
//
// Tampon d'expression + machine à états.
//
// Contrats :
// - Le tampon ne contient QUE des caractères de l'ensemble accepté (ou rien).
// - apply() n'échoue jamais : toute erreur d'évaluation devient l'état Erreur.
// - Après un résultat : un opérateur arithmétique prolonge le calcul ("8" -> "8+"),
//   toute autre saisie repart d'un tampon neuf.

use super::eval::{evaluate_avec, Limites};
use super::format::format_resultat;
use super::historique::{EntreeHistorique, HistoriqueBorne, PuitsHistorique};

/// Affichage d'un tampon vide.
pub const AFFICHAGE_VIDE: &str = "0";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operateur {
    Plus,
    Moins,
    Fois,
    Divise,
    ParenOuvrante,
    ParenFermante,
}

impl Operateur {
    pub fn symbole(self) -> char {
        match self {
            Operateur::Plus => '+',
            Operateur::Moins => '-',
            Operateur::Fois => '*',
            Operateur::Divise => '/',
            Operateur::ParenOuvrante => '(',
            Operateur::ParenFermante => ')',
        }
    }

    pub fn depuis_symbole(c: char) -> Option<Self> {
        match c {
            '+' => Some(Operateur::Plus),
            '-' => Some(Operateur::Moins),
            '*' => Some(Operateur::Fois),
            '/' => Some(Operateur::Divise),
            '(' => Some(Operateur::ParenOuvrante),
            ')' => Some(Operateur::ParenFermante),
            _ => None,
        }
    }

    /// Opérateur binaire : après un résultat, il prolonge le calcul.
    pub fn prolonge_resultat(self) -> bool {
        matches!(
            self,
            Operateur::Plus | Operateur::Moins | Operateur::Fois | Operateur::Divise
        )
    }
}

/// Une pression de bouton (seule entrée de la machine).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    /// 0..=9 ; toute autre valeur est ignorée.
    Chiffre(u8),
    Operateur(Operateur),
    Decimal,
    Effacer,
    Supprimer,
    Evaluer,
}

impl Action {
    /// Touche clavier -> action ("=" évalue). Les touches spéciales (Entrée, Échap,
    /// Retour arrière) sont traitées par la vue.
    pub fn depuis_touche(c: char) -> Option<Self> {
        if let Some(d) = c.to_digit(10) {
            return Some(Action::Chiffre(d as u8));
        }
        match c {
            '.' | ',' => Some(Action::Decimal),
            '=' => Some(Action::Evaluer),
            _ => Operateur::depuis_symbole(c).map(Action::Operateur),
        }
    }
}

/// État observable de la machine.
///
/// `Edition` ne garantit pas que le drapeau « résultat affiché » soit baissé : un
/// `Supprimer` sur un résultat passe en `Edition` sans toucher au drapeau, si bien
/// que le prochain chiffre repart quand même d'un tampon neuf.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Etat {
    Vide,
    /// Saisie en cours (drapeau résultat possiblement encore levé, voir plus haut).
    Edition,
    ResultatAffiche,
    Erreur,
}

/// Paramètres du noyau (dérivés de la configuration).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reglages {
    /// Décimales affichées pour un résultat non entier (troncature).
    pub chiffres: usize,
    pub limites: Limites,
    /// Texte affiché quand l'évaluation échoue.
    pub jeton_erreur: String,
}

impl Default for Reglages {
    fn default() -> Self {
        Self {
            chiffres: 12,
            limites: Limites::default(),
            jeton_erreur: "Error".to_string(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Calculatrice<H: PuitsHistorique = HistoriqueBorne> {
    tampon: String,
    resultat_affiche: bool,
    etat: Etat,
    affichage: String,
    historique: H,
    reglages: Reglages,
}

impl Default for Calculatrice {
    fn default() -> Self {
        Self::avec(Reglages::default(), HistoriqueBorne::default())
    }
}

impl<H: PuitsHistorique> Calculatrice<H> {
    pub fn avec(reglages: Reglages, historique: H) -> Self {
        Self {
            tampon: String::new(),
            resultat_affiche: false,
            etat: Etat::Vide,
            affichage: AFFICHAGE_VIDE.to_string(),
            historique,
            reglages,
        }
    }

    #[cfg(test)]
    pub fn tampon(&self) -> &str {
        &self.tampon
    }

    pub fn affichage(&self) -> &str {
        &self.affichage
    }

    pub fn etat(&self) -> Etat {
        self.etat
    }

    #[cfg(test)]
    pub fn resultat_affiche(&self) -> bool {
        self.resultat_affiche
    }

    pub fn historique(&self) -> &H {
        &self.historique
    }

    pub fn historique_mut(&mut self) -> &mut H {
        &mut self.historique
    }

    /// Applique une action et retourne le nouvel affichage.
    pub fn apply(&mut self, action: Action) -> &str {
        let avant = self.etat;

        match action {
            Action::Effacer => self.effacer(),
            Action::Supprimer => self.supprimer(),
            Action::Evaluer => self.evaluer(),
            Action::Decimal => self.ajouter('.', false),
            Action::Operateur(op) => self.ajouter(op.symbole(), op.prolonge_resultat()),
            Action::Chiffre(d) => match char::from_digit(u32::from(d), 10) {
                Some(c) => self.ajouter(c, false),
                None => log::warn!("chiffre hors 0..=9 ignoré: {d}"),
            },
        }

        if avant != self.etat {
            log::debug!("{avant:?} -> {:?} ({action:?})", self.etat);
        }

        &self.affichage
    }

    fn effacer(&mut self) {
        self.tampon.clear();
        self.resultat_affiche = false;
        self.etat = Etat::Vide;
        self.affichage = AFFICHAGE_VIDE.to_string();
    }

    /// Retire le dernier caractère ; tampon vide => rien ne change (affichage compris).
    fn supprimer(&mut self) {
        if self.tampon.pop().is_none() {
            return;
        }

        if self.tampon.is_empty() {
            self.etat = Etat::Vide;
            self.affichage = AFFICHAGE_VIDE.to_string();
        } else {
            self.etat = Etat::Edition;
            self.affichage = self.tampon.clone();
        }
    }

    fn ajouter(&mut self, c: char, prolonge: bool) {
        if self.resultat_affiche {
            // "8" puis "+" => "8+" ; "8" puis "2" => "2"
            if !prolonge {
                self.tampon.clear();
            }
            self.resultat_affiche = false;
        }

        self.tampon.push(c);
        self.etat = Etat::Edition;
        self.affichage = self.tampon.clone();
    }

    fn evaluer(&mut self) {
        // rien à évaluer ; un résultat affiché se réévalue ("8" => "8 = 8")
        if self.tampon.is_empty() {
            return;
        }

        match evaluate_avec(&self.tampon, &self.reglages.limites) {
            Ok(valeur) => {
                let texte = format_resultat(&valeur, self.reglages.chiffres);
                let expression = std::mem::replace(&mut self.tampon, texte.clone());

                self.affichage = texte.clone();
                self.resultat_affiche = true;
                self.etat = Etat::ResultatAffiche;
                self.historique.append(EntreeHistorique::new(expression, texte));
            }
            Err(e) => {
                log::debug!("évaluation de {:?} échouée: {e}", self.tampon);

                self.tampon.clear();
                self.resultat_affiche = false;
                self.etat = Etat::Erreur;
                self.affichage = self.reglages.jeton_erreur.clone();
            }
        }
    }
}
