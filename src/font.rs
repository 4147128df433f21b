use crate::format::FontSpec;
use crate::{LayoutError, Px};
use id_arena::{Arena, Id};
use owned_ttf_parser::{AsFaceRef, Face, GlyphId, OwnedFace};
use pdf_writer::{
    types::{CidFontType, FontFlags, SystemInfo},
    Finish, Name, Pdf, Ref, Str,
};
use std::collections::HashMap;

/// A parsed TTF or OTF font. Fonts are referred to by their [Id] within a [FontBook],
/// which is also how they are named in PDF content (`/F{index}`).
pub struct Font {
    face: OwnedFace,
}

impl std::fmt::Debug for Font {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Font")
            .field("family", &self.family())
            .field("weight", &self.weight())
            .field("italic", &self.is_italic())
            .finish()
    }
}

impl Font {
    /// Load a font from raw bytes, parsing the font and returning an error if the font
    /// could not be parsed
    pub fn load(bytes: Vec<u8>) -> Result<Font, LayoutError> {
        let face = OwnedFace::from_vec(bytes, 0)?;

        Ok(Font { face })
    }

    fn face(&self) -> &Face<'_> {
        self.face.as_face_ref()
    }

    fn scaling(&self, size: f32) -> f32 {
        size / self.face().units_per_em() as f32
    }

    fn name_entry(&self, id: u16) -> Option<String> {
        self.face()
            .names()
            .into_iter()
            .find(|name| name.name_id == id && name.is_unicode())
            .and_then(|name| name.to_string())
    }

    /// Obtain the full name of the font
    pub fn name(&self) -> Option<String> {
        self.name_entry(owned_ttf_parser::name_id::FULL_NAME)
    }

    /// Obtain the family name of the font
    pub fn family(&self) -> Option<String> {
        self.name_entry(owned_ttf_parser::name_id::FAMILY)
    }

    /// Obtain the weight of the font. Numerical values generally map as follows:
    ///
    /// * 100: Thin (Hairline)
    /// * 300: Light
    /// * 400: Normal
    /// * 700: Bold
    /// * 900: Black (Heavy)
    pub fn weight(&self) -> u16 {
        self.face().weight().to_number()
    }

    pub fn is_italic(&self) -> bool {
        self.face().is_italic()
    }

    /// Distance from the baseline to the top of the font at the given size
    pub fn ascent(&self, size: f32) -> Px {
        Px(self.scaling(size) * self.face().ascender() as f32)
    }

    /// Distance from the baseline to the bottom of the font at the given size, as a
    /// positive number
    pub fn descent(&self, size: f32) -> Px {
        Px(-self.scaling(size) * self.face().descender() as f32)
    }

    pub fn glyph_id(&self, ch: char) -> Option<u16> {
        self.face().glyph_index(ch).map(|i| i.0)
    }

    pub fn replacement_glyph_id(&self) -> Option<u16> {
        self.glyph_id('\u{FFFD}')
    }

    /// The glyph to draw `ch` with: its own, else the replacement glyph, else `?`
    pub fn glyph_or_fallback(&self, ch: char) -> Result<u16, LayoutError> {
        self.glyph_id(ch)
            .or_else(|| self.replacement_glyph_id())
            .or_else(|| self.glyph_id('?'))
            .ok_or(LayoutError::MissingGlyph(ch))
    }

    /// Total advance of `text` at the given size. Characters with no glyph at all
    /// advance by nothing.
    pub fn width_of_text(&self, text: &str, size: f32) -> Px {
        let units: u32 = text
            .chars()
            .filter_map(|ch| self.glyph_or_fallback(ch).ok())
            .filter_map(|gid| self.face().glyph_hor_advance(GlyphId(gid)))
            .map(u32::from)
            .sum();
        Px(self.scaling(size) * units as f32)
    }

    /// Height above the baseline of the tallest glyph in `text`
    pub fn ink_ascent(&self, text: &str, size: f32) -> Px {
        let top = text
            .chars()
            .filter_map(|ch| self.face().glyph_index(ch))
            .filter_map(|gid| self.face().glyph_bounding_box(gid))
            .map(|bbox| bbox.y_max)
            .max()
            .unwrap_or(0)
            .max(0);
        Px(self.scaling(size) * top as f32)
    }

    /// Writes the font into `writer` as a Type0 font with Identity-H encoding, so that
    /// content streams address glyphs by id. Returns the reference of the font
    /// dictionary.
    pub fn embed(&self, next_ref: &mut Ref, index: usize, writer: &mut Pdf) -> Ref {
        let font_id = next_ref.bump();
        let cid_font_id = next_ref.bump();
        let descriptor_id = next_ref.bump();
        let data_id = next_ref.bump();

        let base_font = format!("F{index}");
        let scaling = 1000.0 / self.face().units_per_em() as f32;

        writer
            .type0_font(font_id)
            .base_font(Name(base_font.as_bytes()))
            .encoding_predefined(Name(b"Identity-H"))
            .descendant_font(cid_font_id);

        let mut cid_font = writer.cid_font(cid_font_id);
        cid_font.subtype(CidFontType::Type2);
        cid_font.base_font(Name(base_font.as_bytes()));
        cid_font.system_info(SystemInfo {
            registry: Str(b"Adobe"),
            ordering: Str(b"Identity"),
            supplement: 0,
        });
        cid_font.font_descriptor(descriptor_id);
        cid_font.default_width(1000.0);
        cid_font.widths().consecutive(
            0,
            (0..self.face().number_of_glyphs()).map(|gid| {
                self.face()
                    .glyph_hor_advance(GlyphId(gid))
                    .map(|advance| advance as f32 * scaling)
                    .unwrap_or(1000.0)
            }),
        );
        cid_font.cid_to_gid_map_predefined(Name(b"Identity"));
        cid_font.finish();

        let bbox = self.face().global_bounding_box();
        let mut flags = FontFlags::NON_SYMBOLIC;
        if self.face().is_monospaced() {
            flags.insert(FontFlags::FIXED_PITCH);
        }
        if self.is_italic() {
            flags.insert(FontFlags::ITALIC);
        }

        let name = self.name().unwrap_or_else(|| base_font.clone());
        let mut descriptor = writer.font_descriptor(descriptor_id);
        descriptor.name(Name(name.replace(' ', "").as_bytes()));
        descriptor.flags(flags);
        descriptor.bbox(pdf_writer::Rect {
            x1: bbox.x_min as f32 * scaling,
            y1: bbox.y_min as f32 * scaling,
            x2: bbox.x_max as f32 * scaling,
            y2: bbox.y_max as f32 * scaling,
        });
        descriptor.italic_angle(self.face().italic_angle());
        descriptor.ascent(self.face().ascender() as f32 * scaling);
        descriptor.descent(self.face().descender() as f32 * scaling);
        descriptor.cap_height(
            self.face()
                .capital_height()
                .map(|h| h as f32 * scaling)
                .unwrap_or(1000.0),
        );
        // TODO: derive the stem width from the OS/2 weight class
        descriptor.stem_v(80.0);
        descriptor.font_file2(data_id);
        descriptor.finish();

        writer
            .stream(data_id, self.face.as_slice())
            .pair(Name(b"Length1"), self.face.as_slice().len() as i32);

        font_id
    }
}

/// The fonts a [PdfCanvas](crate::PdfCanvas) can draw with, looked up by the family,
/// weight, and style of a font shorthand
#[derive(Debug, Default)]
pub struct FontBook {
    fonts: Arena<Font>,
    index: HashMap<(String, u16, bool), Id<Font>>,
}

impl FontBook {
    pub fn new() -> FontBook {
        FontBook::default()
    }

    /// Add a font, indexing it under its own family name, weight, and style
    pub fn add(&mut self, font: Font) -> Id<Font> {
        let key = (
            font.family().unwrap_or_default().to_lowercase(),
            font.weight(),
            font.is_italic(),
        );
        let id = self.fonts.alloc(font);
        self.index.entry(key).or_insert(id);
        id
    }

    pub fn len(&self) -> usize {
        self.fonts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fonts.len() == 0
    }

    pub fn get(&self, id: Id<Font>) -> Option<&Font> {
        self.fonts.get(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Id<Font>, &Font)> {
        self.fonts.iter()
    }

    /// Choose the font that best matches `spec`: an exact match on family, weight, and
    /// style; then the same family in the closest weight; then the first font added.
    /// [None] only for an empty book.
    pub fn select(&self, spec: &FontSpec) -> Option<(Id<Font>, &Font)> {
        let family = spec
            .family
            .split(',')
            .next()
            .unwrap_or_default()
            .trim()
            .trim_matches(|ch| ch == '"' || ch == '\'')
            .to_lowercase();

        let exact = self
            .index
            .get(&(family.clone(), spec.weight, spec.italic))
            .copied();
        let closest = || {
            self.index
                .iter()
                .filter(|((name, _, italic), _)| *name == family && *italic == spec.italic)
                .chain(self.index.iter().filter(|((name, _, _), _)| *name == family))
                .min_by_key(|((_, weight, italic), _)| {
                    (*italic != spec.italic, weight.abs_diff(spec.weight))
                })
                .map(|(_, &id)| id)
        };
        let id = exact.or_else(closest).or_else(|| {
            let first = self.fonts.iter().next().map(|(id, _)| id);
            if first.is_some() {
                log::debug!("no font for {:?}, using the first font", spec.family);
            }
            first
        })?;

        self.fonts.get(id).map(|font| (id, font))
    }

    /// Embed every font into `writer`, returning the resource name each one is drawn
    /// with alongside the reference to register it under
    pub fn embed(&self, next_ref: &mut Ref, writer: &mut Pdf) -> Vec<(String, Ref)> {
        self.fonts
            .iter()
            .map(|(id, font)| {
                let index = id.index();
                (format!("F{index}"), font.embed(next_ref, index, writer))
            })
            .collect()
    }
}
