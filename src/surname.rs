use crate::namecase::is_particle;

/// Index of the token that starts the surname, for token lists of three or
/// more words with honorifics and suffixes already stripped.
///
/// The earliest interior particle pulls everything after it into the
/// surname ("Ludwig van Beethoven" keeps "van Beethoven" together);
/// otherwise the last token stands alone.
pub fn find_surname_index(tokens: &[&str]) -> usize {
    for (i, token) in tokens.iter().enumerate().skip(1) {
        if i + 1 == tokens.len() {
            break;
        }
        if is_particle(token) {
            return i;
        }
    }

    tokens.len() - 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_particle() {
        assert_eq!(2, find_surname_index(&["Jane", "Emily", "Doe"]));
    }

    #[test]
    fn interior_particle() {
        assert_eq!(1, find_surname_index(&["Ludwig", "van", "Beethoven"]));
        assert_eq!(2, find_surname_index(&["Maria", "Isabel", "de", "la", "Cruz"]));
    }

    #[test]
    fn leading_token_is_never_the_surname_start() {
        assert_eq!(2, find_surname_index(&["Van", "Jacob", "Smith"]));
    }
}
