//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler l'évaluateur et la machine à états sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - profondeur bornée
//! - budget temps global
//! - invariant clé : le tampon reste dans l'ensemble accepté, quelle que soit la saisie

use std::time::{Duration, Instant};

use super::eval::evaluate;
use super::format::format_resultat;
use super::historique::EntreeHistorique;
use super::jetons::caractere_accepte;
use super::erreur::ErreurEval;
use super::machine::{Action, Calculatrice, Etat, Operateur, Reglages};

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération (bornée) ------------------------ */

fn gen_nombre(rng: &mut Rng) -> String {
    match rng.pick(4) {
        0 => "0".to_string(),
        1 => format!("{}", rng.pick(100)),
        2 => format!("{}.{}", rng.pick(10), rng.pick(100)),
        _ => format!("{}", rng.pick(10) + 1),
    }
}

fn gen_expr(rng: &mut Rng, depth: usize) -> String {
    if depth == 0 {
        return gen_nombre(rng);
    }

    let a = gen_expr(rng, depth - 1);
    let b = gen_expr(rng, depth - 1);
    match rng.pick(6) {
        0 => gen_nombre(rng),
        1 => format!("({a}+{b})"),
        2 => format!("({a}-{b})"),
        3 => format!("{a}*{b}"),
        4 => format!("({a})/({b})"),
        // parenthésé : "a-" suivi de "-(" formerait un "--" refusé
        _ => format!("(-({a}))"),
    }
}

/// Bruit : une chaîne quelconque construite sur l'ensemble accepté.
fn gen_bruit(rng: &mut Rng, len: usize) -> String {
    const ALPHABET: &[u8] = b"0123456789.+-*/() ";
    (0..len)
        .map(|_| ALPHABET[rng.pick(ALPHABET.len() as u32) as usize] as char)
        .collect()
}

fn action_aleatoire(rng: &mut Rng) -> Action {
    match rng.pick(12) {
        0..=4 => Action::Chiffre(rng.pick(10) as u8),
        5 => Action::Decimal,
        6 => Action::Operateur(Operateur::Plus),
        7 => Action::Operateur(Operateur::Divise),
        8 => Action::Operateur(if rng.pick(2) == 0 {
            Operateur::ParenOuvrante
        } else {
            Operateur::ParenFermante
        }),
        9 => Action::Supprimer,
        10 => Action::Evaluer,
        _ => Action::Operateur(Operateur::Moins),
    }
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_expressions_bien_formees() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut rng = Rng::new(0xC0FFEE_u64);

    let mut seen_ok = 0usize;
    let mut seen_div0 = 0usize;

    for _ in 0..200 {
        budget(t0, max);

        let expr = gen_expr(&mut rng, 4);

        // Même entrée => même sortie (déterminisme)
        let r1 = evaluate(&expr);
        let r2 = evaluate(&expr);
        assert_eq!(r1, r2, "non déterministe: {expr:?}");

        match r1 {
            Ok(v) => {
                // le résultat formaté est réinjectable dans le tampon
                let txt = format_resultat(&v, 12);
                assert!(txt.chars().all(caractere_accepte), "txt={txt:?}");
                assert!(evaluate(&txt).is_ok(), "réinjection impossible: {txt:?}");
                seen_ok += 1;
            }
            Err(ErreurEval::DivisionParZero) => seen_div0 += 1,
            Err(e) => panic!("erreur non attendue: expr={expr:?} err={e}"),
        }
    }

    assert!(seen_ok > 50, "trop peu de succès: {seen_ok}");
    assert!(seen_div0 > 0, "aucune division par zéro vue: fuzz trop “sage”");
}

#[test]
fn fuzz_safe_bruit_ne_panique_jamais() {
    let t0 = Instant::now();
    let max = Duration::from_millis(300);

    let mut rng = Rng::new(0xBADC0DE_u64);

    for _ in 0..500 {
        budget(t0, max);

        let len = rng.pick(24) as usize;
        let s = gen_bruit(&mut rng, len);

        // jamais InvalidCharacter sur l'alphabet accepté
        if let Err(ErreurEval::CaractereInvalide(c)) = evaluate(&s) {
            panic!("caractère {c:?} refusé alors qu'il est accepté (s={s:?})");
        }
    }
}

#[test]
fn fuzz_safe_machine_invariants() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut rng = Rng::new(0x5EED_u64);
    let mut calc = Calculatrice::avec(Reglages::default(), Vec::<EntreeHistorique>::new());

    for _ in 0..3000 {
        budget(t0, max);

        let action = action_aleatoire(&mut rng);
        let affichage = calc.apply(action).to_string();

        assert!(
            calc.tampon().chars().all(caractere_accepte),
            "tampon hors ensemble: {:?}",
            calc.tampon()
        );

        match calc.etat() {
            Etat::Vide => {
                assert!(calc.tampon().is_empty());
                assert_eq!(affichage, "0");
            }
            Etat::Edition => assert_eq!(affichage, calc.tampon()),
            Etat::ResultatAffiche => {
                assert!(calc.resultat_affiche());
                assert_eq!(affichage, calc.tampon());
            }
            Etat::Erreur => {
                assert!(calc.tampon().is_empty());
                assert_eq!(affichage, "Error");
            }
        }
    }

    // chaque entrée d'historique est cohérente : son expression se ré-évalue en son résultat
    for e in calc.historique() {
        let v = evaluate(e.expression()).unwrap_or_else(|err| panic!("{e}: {err}"));
        assert_eq!(format_resultat(&v, 12), e.resultat());
    }
}

#[test]
fn fuzz_safe_somme_longue_sans_pile() {
    let t0 = Instant::now();
    let max = Duration::from_millis(200);

    // 500 termes : 999 jetons, sous la borne par défaut
    let expr = vec!["0.5"; 500].join("+");
    budget(t0, max);

    let v = evaluate(&expr).unwrap_or_else(|e| panic!("err: {e}"));
    assert_eq!(format_resultat(&v, 12), "250");
}
