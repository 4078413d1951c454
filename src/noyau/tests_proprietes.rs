//! Propriétés (proptest) de la machine à états.
//!
//! Ces tests vérifient que les propriétés tiennent sur des séquences
//! d'actions générées aléatoirement.

use proptest::prelude::*;

use super::historique::{EntreeHistorique, HistoriqueBorne};
use super::machine::{Action, Calculatrice, Etat, Operateur, Reglages};

fn operateur() -> impl Strategy<Value = Operateur> {
    prop_oneof![
        Just(Operateur::Plus),
        Just(Operateur::Moins),
        Just(Operateur::Fois),
        Just(Operateur::Divise),
        Just(Operateur::ParenOuvrante),
        Just(Operateur::ParenFermante),
    ]
}

/// Saisie sans évaluation : chiffres, opérateurs, point.
fn saisie() -> impl Strategy<Value = Action> {
    prop_oneof![
        3 => (0u8..10).prop_map(Action::Chiffre),
        2 => operateur().prop_map(Action::Operateur),
        1 => Just(Action::Decimal),
    ]
}

fn action_quelconque() -> impl Strategy<Value = Action> {
    prop_oneof![
        6 => saisie(),
        1 => Just(Action::Effacer),
        1 => Just(Action::Supprimer),
        2 => Just(Action::Evaluer),
    ]
}

fn caractere(action: Action) -> char {
    match action {
        Action::Chiffre(d) => char::from(b'0' + d),
        Action::Operateur(op) => op.symbole(),
        Action::Decimal => '.',
        other => panic!("pas une saisie: {other:?}"),
    }
}

fn calc() -> Calculatrice<Vec<EntreeHistorique>> {
    Calculatrice::avec(Reglages::default(), Vec::new())
}

proptest! {
    #[test]
    fn tampon_miroir_de_la_saisie(actions in prop::collection::vec(saisie(), 1..40)) {
        let mut c = calc();
        let mut attendu = String::new();

        for a in actions {
            attendu.push(caractere(a));
            let affichage = c.apply(a).to_string();
            prop_assert_eq!(&affichage, &attendu);
        }
        prop_assert_eq!(c.tampon(), attendu.as_str());
        prop_assert_eq!(c.etat(), Etat::Edition);
    }

    #[test]
    fn effacer_remet_a_zero(actions in prop::collection::vec(action_quelconque(), 0..40)) {
        let mut c = calc();
        for a in actions {
            c.apply(a);
        }

        prop_assert_eq!(c.apply(Action::Effacer), "0");
        prop_assert_eq!(c.tampon(), "");
        prop_assert_eq!(c.etat(), Etat::Vide);
        prop_assert!(!c.resultat_affiche());
    }

    #[test]
    fn historique_jamais_au_dela_de_dix(termes in prop::collection::vec(0u8..10, 0..30)) {
        let mut c: Calculatrice = Calculatrice::default();
        let mut reussis = 0usize;

        for d in termes {
            c.apply(Action::Effacer);
            c.apply(Action::Chiffre(d));
            c.apply(Action::Operateur(Operateur::Plus));
            c.apply(Action::Chiffre(1));
            c.apply(Action::Evaluer);
            reussis += 1;

            let h: &HistoriqueBorne = c.historique();
            prop_assert!(h.len() <= 10);
            prop_assert_eq!(h.len(), reussis.min(10));
        }
    }

    #[test]
    fn supprimer_retire_un_caractere(actions in prop::collection::vec(saisie(), 1..20)) {
        let mut c = calc();
        for a in actions {
            c.apply(a);
        }
        let avant = c.tampon().to_string();

        c.apply(Action::Supprimer);
        prop_assert_eq!(c.tampon(), &avant[..avant.len() - 1]);
    }
}
