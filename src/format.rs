use crate::colour::Colour;

pub const DEFAULT_FONT_FAMILY: &str = "Arial";
pub const DEFAULT_FONT_SIZE: f32 = 14.0;
pub const DEFAULT_FONT_WEIGHT: &str = "400";

/// A partial text style. Any field left as [None] is inherited from whatever the format is
/// resolved against: the base format of a layout for individual words, or the crate
/// defaults for the base format itself.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct TextFormat {
    /// Font family, e.g. `"Arial"`
    pub family: Option<String>,
    /// Font size, must be strictly positive
    pub size: Option<f32>,
    /// Font weight, e.g. `"400"` or `"bold"`
    pub weight: Option<String>,
    /// Font style, e.g. `"italic"`
    pub style: Option<String>,
    /// Font variant, either `"normal"` or `"small-caps"`
    pub variant: Option<String>,
    /// Fill colour
    pub colour: Option<Colour>,
}

impl TextFormat {
    /// Create a format with nothing set, inheriting everything
    pub fn new() -> TextFormat {
        TextFormat::default()
    }

    /// Set the font family, modifying `self`
    pub fn family<S: ToString>(&mut self, family: S) -> &mut Self {
        self.family = Some(family.to_string());
        self
    }

    /// Set the font size, modifying `self`
    pub fn size(&mut self, size: f32) -> &mut Self {
        self.size = Some(size);
        self
    }

    /// Set the font weight, modifying `self`
    pub fn weight<S: ToString>(&mut self, weight: S) -> &mut Self {
        self.weight = Some(weight.to_string());
        self
    }

    /// Set the font style, modifying `self`
    pub fn style<S: ToString>(&mut self, style: S) -> &mut Self {
        self.style = Some(style.to_string());
        self
    }

    /// Set the font variant, modifying `self`
    pub fn variant<S: ToString>(&mut self, variant: S) -> &mut Self {
        self.variant = Some(variant.to_string());
        self
    }

    /// Set the fill colour, modifying `self`
    pub fn colour(&mut self, colour: Colour) -> &mut Self {
        self.colour = Some(colour);
        self
    }

    /// Fills in every unset field from `base`. A non-positive size is ignored in favour of
    /// the base size.
    pub fn resolve(&self, base: &ResolvedFormat) -> ResolvedFormat {
        let size = match self.size {
            Some(size) if size > 0.0 => size,
            Some(size) => {
                log::warn!("ignoring non-positive font size {size}, using {}", base.size);
                base.size
            }
            None => base.size,
        };
        ResolvedFormat {
            family: self.family.clone().unwrap_or_else(|| base.family.clone()),
            size,
            weight: self.weight.clone().unwrap_or_else(|| base.weight.clone()),
            style: self.style.clone().unwrap_or_else(|| base.style.clone()),
            variant: self.variant.clone().unwrap_or_else(|| base.variant.clone()),
            colour: self.colour.unwrap_or(base.colour),
        }
    }

    /// Like [TextFormat::resolve], but against the crate defaults. Unlike
    /// [TextFormat::resolve], a non-positive size is kept so layouts can reject it.
    pub fn resolve_default(&self) -> ResolvedFormat {
        let mut format = self.clone();
        let size = format.size.take().unwrap_or(DEFAULT_FONT_SIZE);
        ResolvedFormat {
            size,
            ..format.resolve(&ResolvedFormat::default())
        }
    }
}

/// A text style with every field filled in; this is what words are measured and
/// rendered with.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedFormat {
    pub family: String,
    pub size: f32,
    pub weight: String,
    pub style: String,
    pub variant: String,
    pub colour: Colour,
}

impl Default for ResolvedFormat {
    fn default() -> Self {
        ResolvedFormat {
            family: DEFAULT_FONT_FAMILY.to_string(),
            size: DEFAULT_FONT_SIZE,
            weight: DEFAULT_FONT_WEIGHT.to_string(),
            style: String::new(),
            variant: String::new(),
            colour: Colour::default(),
        }
    }
}

impl ResolvedFormat {
    /// Generates the font shorthand a [Canvas](crate::Canvas) understands:
    /// `"{style} {variant} {weight} {size}px {family}"`, skipping empty parts. Style,
    /// variant, and weight precede the size and the family is always last.
    pub fn font(&self) -> String {
        let size = format!("{}px", self.size);
        [
            self.style.as_str(),
            self.variant.as_str(),
            self.weight.as_str(),
            size.as_str(),
            self.family.as_str(),
        ]
        .into_iter()
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
    }
}

/// The pieces of a font shorthand, as read back by a surface that needs to pick a face
#[derive(Debug, Clone, PartialEq)]
pub struct FontSpec {
    pub family: String,
    pub size: f32,
    /// Numerical weight; 400 is normal, 700 is bold
    pub weight: u16,
    pub italic: bool,
    pub small_caps: bool,
}

impl FontSpec {
    /// Parse a font shorthand such as `"italic bold 12px Fira Sans"`. Returns [None] if
    /// there is no `{size}px` part.
    pub fn parse(shorthand: &str) -> Option<FontSpec> {
        let parts: Vec<&str> = shorthand.split_whitespace().collect();
        let size_idx = parts.iter().position(|part| {
            part.strip_suffix("px")
                .is_some_and(|n| n.parse::<f32>().is_ok())
        })?;
        let size: f32 = parts[size_idx].strip_suffix("px")?.parse().ok()?;

        let mut spec = FontSpec {
            family: parts[size_idx + 1..]
                .join(" ")
                .trim_matches(|ch| ch == '"' || ch == '\'')
                .to_string(),
            size,
            weight: 400,
            italic: false,
            small_caps: false,
        };
        if spec.family.is_empty() {
            spec.family = DEFAULT_FONT_FAMILY.to_string();
        }

        for part in &parts[..size_idx] {
            match *part {
                "italic" | "oblique" => spec.italic = true,
                "small-caps" => spec.small_caps = true,
                "bold" | "bolder" => spec.weight = 700,
                "lighter" => spec.weight = 300,
                "normal" => {}
                other => {
                    if let Ok(weight) = other.parse::<u16>() {
                        spec.weight = weight;
                    }
                }
            }
        }

        Some(spec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colours;

    #[test]
    fn default_font_shorthand() {
        assert_eq!(ResolvedFormat::default().font(), "400 14px Arial");
    }

    #[test]
    fn shorthand_orders_parts() {
        let base = ResolvedFormat::default();
        let format = TextFormat::new()
            .style("italic")
            .variant("small-caps")
            .weight("bold")
            .size(9.5)
            .family("Fira Sans")
            .clone()
            .resolve(&base);
        assert_eq!(format.font(), "italic small-caps bold 9.5px Fira Sans");
    }

    #[test]
    fn words_inherit_unset_fields() {
        let base = TextFormat::new()
            .family("Georgia")
            .colour(colours::RED)
            .clone()
            .resolve_default();
        let word = TextFormat::new().size(20.0).clone().resolve(&base);
        assert_eq!(word.family, "Georgia");
        assert_eq!(word.size, 20.0);
        assert_eq!(word.weight, "400");
        assert_eq!(word.colour, colours::RED);
    }

    #[test]
    fn non_positive_word_size_falls_back_to_base() {
        let base = ResolvedFormat::default();
        let word = TextFormat::new().size(0.0).clone().resolve(&base);
        assert_eq!(word.size, DEFAULT_FONT_SIZE);
    }

    #[test]
    fn base_keeps_non_positive_size() {
        let base = TextFormat::new().size(-3.0).clone().resolve_default();
        assert_eq!(base.size, -3.0);
    }

    #[test]
    fn parses_shorthand_back() {
        let spec = FontSpec::parse("italic  bold 12px Fira Sans").unwrap();
        assert_eq!(spec.family, "Fira Sans");
        assert_eq!(spec.size, 12.0);
        assert_eq!(spec.weight, 700);
        assert!(spec.italic);
        assert!(!spec.small_caps);

        let spec = FontSpec::parse("300 8px").unwrap();
        assert_eq!(spec.family, DEFAULT_FONT_FAMILY);
        assert_eq!(spec.weight, 300);

        assert!(FontSpec::parse("bold Arial").is_none());
    }
}
