// src/noyau/jetons.rs

use super::lecture::ErreurLecture;

#[derive(Clone, Debug, PartialEq)]
pub enum Tok {
    Num(f64),
    Pi,

    // √n, sqrt(n), sqrtn : radicande déjà lu
    Racine(f64),

    Plus,
    Minus,
    Star,
    Slash,
}

/// Tokenize une réponse en jetons.
/// Supporte:
/// - décimaux (ex: 12, 0.5, .5, 5e-1)
/// - opérateurs + - * /  (et le moins typographique −)
/// - π ou pi (insensible à la casse)
/// - √2, √(2), sqrt2, sqrt(2), sqrt 3 … (radicande numérique)
/// - espaces ignorés
pub fn tokenize(s: &str) -> Result<Vec<Tok>, ErreurLecture> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        // Opérateurs
        let op = match c {
            '+' => Some(Tok::Plus),
            '-' | '−' => Some(Tok::Minus),
            '*' | '×' | '·' => Some(Tok::Star),
            '/' => Some(Tok::Slash),
            _ => None,
        };
        if let Some(t) = op {
            out.push(t);
            i += 1;
            continue;
        }

        if c == 'π' {
            out.push(Tok::Pi);
            i += 1;
            continue;
        }

        if c == '√' {
            i += 1;
            let r = lire_radicande(&chars, &mut i)?;
            out.push(Tok::Racine(r));
            continue;
        }

        // Mots ASCII : pi, sqrt (lettres seulement : "sqrt2" = sqrt + 2)
        if c.is_ascii_alphabetic() {
            let start = i;
            while i < chars.len() && chars[i].is_ascii_alphabetic() {
                i += 1;
            }
            let mot: String = chars[start..i].iter().collect::<String>().to_lowercase();

            match mot.as_str() {
                "pi" => out.push(Tok::Pi),
                "sqrt" => {
                    let r = lire_radicande(&chars, &mut i)?;
                    out.push(Tok::Racine(r));
                }
                _ => return Err(ErreurLecture::MotInconnu(mot)),
            }
            continue;
        }

        if c.is_ascii_digit() || c == '.' {
            out.push(Tok::Num(lire_nombre(&chars, &mut i)?));
            continue;
        }

        return Err(ErreurLecture::Symbole(c));
    }

    Ok(out)
}

/// Nombre décimal à partir de chars[*i] ; avance *i.
fn lire_nombre(chars: &[char], i: &mut usize) -> Result<f64, ErreurLecture> {
    let start = *i;
    let mut point = false;
    while *i < chars.len() {
        let c = chars[*i];
        if c.is_ascii_digit() {
            *i += 1;
        } else if c == '.' && !point {
            point = true;
            *i += 1;
        } else {
            break;
        }
    }

    // exposant : e[+-]chiffres, sinon le 'e' reste un mot
    if *i < chars.len() && matches!(chars[*i], 'e' | 'E') {
        let mut j = *i + 1;
        if j < chars.len() && matches!(chars[j], '+' | '-') {
            j += 1;
        }
        if j < chars.len() && chars[j].is_ascii_digit() {
            while j < chars.len() && chars[j].is_ascii_digit() {
                j += 1;
            }
            *i = j;
        }
    }

    let txt: String = chars[start..*i].iter().collect();
    txt.parse::<f64>()
        .map_err(|_| ErreurLecture::Syntaxe(format!("nombre invalide: {txt}")))
}

/// Radicande après √ / sqrt : nombre nu ou entre parenthèses.
fn lire_radicande(chars: &[char], i: &mut usize) -> Result<f64, ErreurLecture> {
    sauter_espaces(chars, i);

    let parens = *i < chars.len() && chars[*i] == '(';
    if parens {
        *i += 1;
        sauter_espaces(chars, i);
    }

    if *i >= chars.len() || !(chars[*i].is_ascii_digit() || chars[*i] == '.') {
        return Err(ErreurLecture::Syntaxe("radicande attendu après √".into()));
    }
    let r = lire_nombre(chars, i)?;

    if parens {
        sauter_espaces(chars, i);
        if *i >= chars.len() || chars[*i] != ')' {
            return Err(ErreurLecture::Syntaxe("')' attendue".into()));
        }
        *i += 1;
    }

    Ok(r)
}

fn sauter_espaces(chars: &[char], i: &mut usize) {
    while *i < chars.len() && chars[*i].is_whitespace() {
        *i += 1;
    }
}

/// Format utilitaire (journal) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Tok]) -> String {
    let mut out = Vec::new();
    for t in tokens {
        let s = match t {
            Tok::Num(x) => format!("{x}"),
            Tok::Pi => "π".to_string(),
            Tok::Racine(r) => format!("√{r}"),

            Tok::Plus => "+".to_string(),
            Tok::Minus => "-".to_string(),
            Tok::Star => "*".to_string(),
            Tok::Slash => "/".to_string(),
        };
        out.push(s);
    }
    out.join(" ")
}
