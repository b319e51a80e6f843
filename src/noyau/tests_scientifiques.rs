//! Tests scientifiques : propriétés du noyau (table, format, lecture, notation).
//!
//! Notes :
//! - Les flottants de la table sont des constantes, pas des sin()/cos() calculés.
//! - La frontière de tolérance est stricte (`<`) : 1 vs 0.99 est faux.

use std::f64::consts::{FRAC_PI_2, FRAC_PI_6, PI, SQRT_2};

use rand::rngs::StdRng;
use rand::SeedableRng;

use super::angles::{Fonction, ValeurTrig, ANGLES, SQRT_3};
use super::format::{format_radians, format_valeur};
use super::fraction::{en_fraction, rationaliser};
use super::lecture::{lire_reponse, parse_pi, parse_sqrt, ErreurLecture};
use super::notation::noter;
use super::question::{construire, generer_question, Mode};
use super::reglages::Reglages;

fn fini(r: Result<ValeurTrig, ErreurLecture>, texte: &str) -> f64 {
    match r {
        Ok(ValeurTrig::Fini(x)) => x,
        autre => panic!("texte={texte:?} lu={autre:?}"),
    }
}

fn assert_pi(texte: &str, attendu: f64) {
    let x = fini(parse_pi(texte), texte);
    assert!((x - attendu).abs() < 1e-12, "texte={texte:?} x={x} attendu={attendu}");
}

fn assert_sqrt(texte: &str, attendu: f64) {
    let x = fini(parse_sqrt(texte), texte);
    assert!((x - attendu).abs() < 1e-12, "texte={texte:?} x={x} attendu={attendu}");
}

/* ------------------------ Table des angles ------------------------ */

#[test]
fn sci_table_identite_pythagore() {
    for a in ANGLES {
        let s = a.sin * a.sin + a.cos * a.cos;
        assert!((s - 1.0).abs() < 1e-9, "angle={}", a.radians);
    }
}

#[test]
fn sci_table_tangente() {
    for a in ANGLES {
        match a.tan {
            ValeurTrig::Indefini => assert_eq!(a.cos, 0.0),
            ValeurTrig::Fini(t) => assert!((t - a.sin / a.cos).abs() < 1e-12),
        }
    }
    assert_eq!(ANGLES.len(), 9);
    assert_eq!(ANGLES[0].radians, 0.0);
    assert_eq!(ANGLES[8].radians, PI);
}

#[test]
fn sci_inverse_reciproque() {
    assert_eq!(ValeurTrig::Fini(0.0).inverse(), ValeurTrig::Indefini);
    assert_eq!(ValeurTrig::Indefini.inverse(), ValeurTrig::Fini(0.0));

    // cot(π/2) = 0 (tan indéfini), csc(0) indéfini
    assert_eq!(Fonction::Cot.valeur(&ANGLES[4]), ValeurTrig::Fini(0.0));
    assert_eq!(Fonction::Csc.valeur(&ANGLES[0]), ValeurTrig::Indefini);
    assert_eq!(Fonction::Sec.valeur(&ANGLES[4]), ValeurTrig::Indefini);
}

/* ------------------------ Fraction continue ------------------------ */

#[test]
fn sci_fraction_continue() {
    assert_eq!(en_fraction(0.5), "1/2");
    assert_eq!(en_fraction(-0.75), "-3/4");
    assert_eq!(en_fraction(3.0), "3");
    assert_eq!(en_fraction(5.0 / 6.0), "5/6");
    assert_eq!(en_fraction(f64::INFINITY), "∞");
    assert!(rationaliser(f64::NAN).is_none());

    // √2 : réduite 19601/13860 passe la tolérance 1e-8
    let r = rationaliser(SQRT_2).map(|r| r.to_string());
    assert_eq!(r.as_deref(), Some("19601/13860"));
}

/* ------------------------ Format ------------------------ */

#[test]
fn sci_format_radians() {
    assert_eq!(format_radians(0.0), "0");
    assert_eq!(format_radians(PI), "π");
    assert_eq!(format_radians(FRAC_PI_2), "π/2");
    assert_eq!(format_radians(2.0 * PI / 3.0), "2π/3");
    assert_eq!(format_radians(-PI), "-π");
    assert_eq!(format_radians(-PI / 4.0), "-π/4");
    assert_eq!(format_radians(2.0 * PI), "2π");
    assert_eq!(format_radians(f64::NAN), "∞");
}

#[test]
fn sci_format_valeur() {
    assert_eq!(format_valeur(ValeurTrig::Fini(0.5)), "1/2");
    assert_eq!(format_valeur(ValeurTrig::Fini(SQRT_2 / 2.0)), "√2/2");
    assert_eq!(format_valeur(ValeurTrig::Indefini), "∞");
    assert_eq!(format_valeur(ValeurTrig::Fini(-SQRT_3 / 3.0)), "-√3/3");
    assert_eq!(format_valeur(ValeurTrig::Fini(2.0 / SQRT_3)), "2√3/3");
    assert_eq!(format_valeur(ValeurTrig::Fini(-0.0)), "0");
    assert_eq!(format_valeur(ValeurTrig::Fini(0.75)), "3/4");
    assert_eq!(format_valeur(ValeurTrig::Fini(f64::INFINITY)), "∞");
}

/* ------------------------ Lecture ------------------------ */

#[test]
fn sci_lecture_pi() {
    assert_pi("π/2", FRAC_PI_2);
    assert_pi("-π", -PI);
    assert_pi("2π/3", 2.0 * PI / 3.0);
    assert_pi("π", PI);
    assert_pi("+π", PI);
    assert_pi("2π", 2.0 * PI);
    assert_pi("3π/4", 3.0 * PI / 4.0);
    assert_pi("pi/6", FRAC_PI_6);
    assert_pi("  5 PI / 6 ", 5.0 * PI / 6.0);
    assert_pi("3/4π", 3.0 * PI / 4.0);
    assert_pi("2*π/3", 2.0 * PI / 3.0);
    assert_pi("1/2", 0.5);
    assert_pi("0", 0.0);
    assert_pi("1.5708", 1.5708);
}

#[test]
fn sci_lecture_indefini() {
    for t in ["und", "∞", "INF", " infty ", "Infinity", "undefined", "undef"] {
        assert_eq!(parse_pi(t), Ok(ValeurTrig::Indefini), "t={t:?}");
        assert_eq!(parse_sqrt(t), Ok(ValeurTrig::Indefini), "t={t:?}");
    }
}

#[test]
fn sci_lecture_illisible() {
    assert!(parse_pi("abc").is_err());
    assert!(parse_pi("π/0").is_err());
    assert!(parse_pi("ππ").is_err());
    assert!(parse_pi("π2").is_err());
    assert!(parse_pi("1/2/3").is_err());
    assert!(parse_pi("√2").is_err());
    assert!(parse_sqrt("π").is_err());
    assert!(parse_sqrt("sqrt(2").is_err());
    assert!(parse_sqrt("1,5").is_err());
    assert_eq!(parse_pi("   "), Err(ErreurLecture::Vide));
    assert_eq!(parse_sqrt("3/0"), Err(ErreurLecture::DivisionParZero));
}

#[test]
fn sci_lecture_racines() {
    let r2 = SQRT_2;
    let r3 = SQRT_3;
    assert_sqrt("√2/2", r2 / 2.0);
    assert_sqrt("sqrt(2)/2", r2 / 2.0);
    assert_sqrt("sqrt2/2", r2 / 2.0);
    assert_sqrt("-√3/2", -r3 / 2.0);
    assert_sqrt("sqrt3", r3);
    assert_sqrt("sqrt ( 3 )", r3);
    assert_sqrt("2√3/3", 2.0 * r3 / 3.0);
    assert_sqrt("2*sqrt(3)/3", 2.0 * r3 / 3.0);
    assert_sqrt("1/√3", 1.0 / r3);
    assert_sqrt("-0.5", -0.5);
    assert_sqrt("1/2", 0.5);
}

#[test]
fn sci_lecture_pi_au_denominateur() {
    for t in ["2/π", "1/π", "1/pi", "3/-π", "π/π"] {
        assert!(
            matches!(parse_pi(t), Err(ErreurLecture::Syntaxe(_))),
            "t={t:?} lu={:?}",
            parse_pi(t)
        );
    }
    // coefficient avant π : multiple de π, pas une division par π
    assert_pi("3/4π", 3.0 * PI / 4.0);
    assert_pi("1/2π", FRAC_PI_2);
}

#[test]
fn sci_lecture_exposant() {
    assert_sqrt("5e-1", 0.5);
    assert_sqrt("1E+0", 1.0);
    assert_sqrt("-2.5e0", -2.5);
    assert_pi("5e-1π", FRAC_PI_2);
    assert_pi("1e0/6", 1.0 / 6.0);

    // 'e' sans chiffres derrière : mot inconnu
    assert_eq!(parse_sqrt("2e"), Err(ErreurLecture::MotInconnu("e".into())));
    assert_eq!(parse_sqrt("2e+"), Err(ErreurLecture::MotInconnu("e".into())));
    assert!(parse_sqrt("1e400").is_err());
}

/* ------------------------ Aller-retour ------------------------ */

#[test]
fn sci_aller_retour_radians() {
    for a in ANGLES {
        let txt = format_radians(a.radians);
        let x = fini(parse_pi(&txt), &txt);
        assert!((x - a.radians).abs() < 1e-6, "txt={txt:?}");
    }
}

#[test]
fn sci_reponse_affichee_toujours_juste() {
    // Toutes les combinaisons (fonction, angle) des deux modes.
    let combos = [
        (Mode::Inverse, Fonction::INVERSES_ETENDUES),
        (Mode::Vitesse, Fonction::DIRECTES),
    ];
    for (mode, fonctions) in combos {
        for &f in fonctions {
            for a in ANGLES {
                let q = construire(mode, f, a);
                let lu = lire_reponse(mode, &q.reponse_affichee);
                assert!(noter(mode, &lu, &q), "q={:?} lu={lu:?}", q.enonce);
            }
        }
    }
}

/* ------------------------ Notation ------------------------ */

#[test]
fn sci_scenario_arcsin_demi() {
    let q = construire(Mode::Inverse, Fonction::Arcsin, ANGLES[1]);
    assert_eq!(q.enonce, "arcsin(1/2)");
    assert_eq!(q.reponse_affichee, "π/6");

    assert!(!noter(Mode::Inverse, &lire_reponse(Mode::Inverse, "1/2"), &q));
    assert!(noter(Mode::Inverse, &lire_reponse(Mode::Inverse, "π/6"), &q));
    assert!(noter(Mode::Inverse, &lire_reponse(Mode::Inverse, "0.5236"), &q));
    assert!(!noter(Mode::Inverse, &lire_reponse(Mode::Inverse, "und"), &q));
}

#[test]
fn sci_scenario_csc_pi_sur_2() {
    let q = construire(Mode::Vitesse, Fonction::Csc, ANGLES[4]);
    assert_eq!(q.enonce, "csc(π/2)");
    assert_eq!(q.reponse, ValeurTrig::Fini(1.0));

    let note = |t: &str| noter(Mode::Vitesse, &lire_reponse(Mode::Vitesse, t), &q);
    assert!(note("1"));
    assert!(note("0.995"));
    // |0.99 - 1| et |1.01 - 1| dépassent 0.01 d’un ulp : frontière stricte
    assert!(!note("0.99"));
    assert!(!note("1.01"));
    assert!(!note("∞"));
    assert!(!note("abc"));
}

#[test]
fn sci_indefini_contre_indefini() {
    let q = construire(Mode::Vitesse, Fonction::Sec, ANGLES[4]);
    assert_eq!(q.reponse, ValeurTrig::Indefini);
    assert_eq!(q.reponse_affichee, "∞");

    let note = |t: &str| noter(Mode::Vitesse, &lire_reponse(Mode::Vitesse, t), &q);
    assert!(note("und"));
    assert!(note("∞"));
    assert!(!note("0"));
    assert!(!note("99999"));
}

#[test]
fn sci_generateur_etendu_toujours_fini() {
    let mut rng = StdRng::seed_from_u64(0x7121_0001);
    let reglages = Reglages::default();
    for _ in 0..1000 {
        let q = generer_question(Mode::Inverse, &reglages, &mut rng);
        assert!(q.argument.est_fini(), "q={}", q.enonce);
        assert!(!q.enonce.contains('∞'), "q={}", q.enonce);
    }
}
