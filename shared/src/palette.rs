#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BrushColor {
    pub name: &'static str,
    pub hex: &'static str,
}

pub const PALETTE: [BrushColor; 8] = [
    BrushColor {
        name: "red",
        hex: "#f02304",
    },
    BrushColor {
        name: "orange",
        hex: "#ff8000",
    },
    BrushColor {
        name: "yellow",
        hex: "#ffe70f",
    },
    BrushColor {
        name: "green",
        hex: "#17e132",
    },
    BrushColor {
        name: "mint",
        hex: "#00fffb",
    },
    BrushColor {
        name: "blue",
        hex: "#000dff",
    },
    BrushColor {
        name: "black",
        hex: "#000",
    },
    BrushColor {
        name: "pink",
        hex: "#ff1d8e",
    },
];

impl Default for BrushColor {
    fn default() -> Self {
        PALETTE[0]
    }
}

pub fn palette_index(color: BrushColor) -> Option<usize> {
    PALETTE.iter().position(|entry| entry.name == color.name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_first_entry() {
        assert_eq!(BrushColor::default().name, "red");
        assert_eq!(palette_index(BrushColor::default()), Some(0));
    }

    #[test]
    fn index_of_last_entry() {
        assert_eq!(palette_index(PALETTE[7]), Some(7));
    }
}
