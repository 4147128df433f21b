use boxed_text::layout::{Align, Text, TextConfig, TextLayout, VerticalAlign, Word};
use boxed_text::pdf_writer::{Finish, Name, Pdf, Ref};
use boxed_text::{colours, Font, FontBook, PdfCanvas, Rect, TextFormat};

const PAGE_WIDTH: f32 = 612.0;
const PAGE_HEIGHT: f32 = 792.0;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // usage: text-layout <font.ttf> [out.pdf]
    let mut args = std::env::args().skip(1);
    let font_path = args.next().ok_or("pass the path of a TTF or OTF font")?;
    let out_path = args.next().unwrap_or_else(|| "text-layout.pdf".to_string());

    let font = Font::load(std::fs::read(font_path)?)?;
    let family = font.family().unwrap_or_default();
    let mut fonts = FontBook::new();
    fonts.add(font);

    let mut canvas = PdfCanvas::new(&fonts, PAGE_HEIGHT);
    let mut layout = TextLayout::new();
    let base = TextFormat::new().family(&family).size(12.0).clone();

    // a justified column of plain text
    let config = TextConfig::new(Rect::new(72, 72, 468, 300))
        .align(Align::Left)
        .vertical_align(VerticalAlign::Top)
        .justify(true)
        .format(base.clone())
        .debug(true)
        .clone();
    let text = format!("{}\n\n{}", lipsum::lipsum(80), lipsum::lipsum(60));
    let spec = layout.draw(&mut canvas, &Text::from(text), &config)?;

    // a centred, mixed-format heading underneath it
    let heading = vec![
        Word::formatted("Boxed", TextFormat::new().size(28.0).colour(colours::RED).clone()),
        Word::new("text"),
        Word::formatted("layout", TextFormat::new().size(20.0).clone()),
    ];
    let config = TextConfig::new(Rect::new(72, 72.0 + spec.height.0 + 24.0, 468, 80))
        .format(base.clone().size(16.0).clone())
        .debug(true)
        .clone();
    layout.draw(&mut canvas, &Text::from(heading), &config)?;

    let content = canvas.finish();

    let mut pdf = Pdf::new();
    let mut next = Ref::new(1);
    let catalog_id = next.bump();
    let tree_id = next.bump();
    let page_id = next.bump();
    let content_id = next.bump();

    pdf.catalog(catalog_id).pages(tree_id);
    pdf.pages(tree_id).kids([page_id]).count(1);
    let font_refs = fonts.embed(&mut next, &mut pdf);

    let mut page = pdf.page(page_id);
    page.media_box(boxed_text::pdf_writer::Rect::new(0.0, 0.0, PAGE_WIDTH, PAGE_HEIGHT));
    page.parent(tree_id);
    page.contents(content_id);
    let mut resources = page.resources();
    let mut font_dict = resources.fonts();
    for (name, id) in font_refs.iter() {
        font_dict.pair(Name(name.as_bytes()), *id);
    }
    font_dict.finish();
    resources.finish();
    page.finish();

    pdf.stream(content_id, &content);
    std::fs::write(out_path, pdf.finish())?;
    Ok(())
}
