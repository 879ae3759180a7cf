//! Layout to Typst markup transpiler
//!
//! Every piece of text is emitted as a Typst string literal, so record
//! content never has to be escaped against markup syntax.

use transmittal_ast::{RunStyle, StyledRun};
use transmittal_core::{
    LogoPlacement, PageGeometry, RecipientRow, RecipientTable, Renderer, Rgb, Rule,
    TransmittalLayout, NO_RECIPIENTS, SIGNING_CAPTIONS,
};

/// Body first-line indent
const INDENT_MM: f64 = 12.7;

/// Width of the office column in the recipient table
const OFFICE_COLUMN: &str = "40%";

/// Serif family bundled with the compiler, used when the configured one is absent
const FALLBACK_FONT: &str = "Libertinus Serif";

/// Transpiler for converting a layout to Typst markup
pub struct Transpiler;

impl Transpiler {
    /// Transpile a layout to Typst markup
    ///
    /// Logos are referenced by their asset names ("logo-outer-left.png"),
    /// which the compiler resolves from memory.
    pub fn transpile(layout: &TransmittalLayout, logo_names: &[String]) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "#set document(title: \"{}\")\n",
            escape_string(&format!("Transmittal Sheet {}", layout.document_no))
        ));
        output.push_str(&Self::page_setup(layout));
        output.push_str(&format!(
            "#set text(font: (\"{}\", \"{}\"), size: {})\n",
            escape_string(&layout.font_family),
            FALLBACK_FONT,
            pt(layout.fonts.body_pt)
        ));
        output.push_str("#set par(leading: 0.6em, spacing: 0.6em)\n\n");

        for (placement, name) in layout.logos.iter().zip(logo_names) {
            output.push_str(&Self::transpile_logo(placement, name, &layout.page));
        }

        output.push_str(&Self::transpile_agency(layout));
        output.push_str(&Self::transpile_rules(&layout.rules));
        output.push_str(&Self::transpile_letter(layout));
        output.push_str(&Self::transpile_signatory(layout));
        output.push_str(&Self::transpile_table(
            &layout.recipient_table(Renderer::Pdf),
            layout,
        ));

        output
    }

    fn page_setup(layout: &TransmittalLayout) -> String {
        let page = &layout.page;
        format!(
            "#set page(width: {}, height: {}, margin: (left: {}, right: {}, top: {}, bottom: {}), footer: align(right, text(size: {}, \"{}\")))\n",
            mm(page.width_mm),
            mm(page.height_mm),
            mm(page.margin_left_mm),
            mm(page.margin_right_mm),
            mm(page.margin_top_mm),
            mm(page.margin_bottom_mm),
            pt(layout.fonts.footer_pt),
            escape_string(&layout.footer)
        )
    }

    /// Place a logo at its page position, relative to the content area
    fn transpile_logo(placement: &LogoPlacement, name: &str, page: &PageGeometry) -> String {
        format!(
            "#place(top + left, dx: {}, dy: {}, image(\"{}\", width: {}, height: {}))\n",
            mm(placement.x_mm - page.margin_left_mm),
            mm(placement.y_mm - page.margin_top_mm),
            escape_string(name),
            mm(placement.width_mm),
            mm(placement.height_mm)
        )
    }

    /// Centered title block, pushed below the logo row
    fn transpile_agency(layout: &TransmittalLayout) -> String {
        let size = pt(layout.fonts.agency_pt);
        let offset = (layout.agency_top_mm - layout.page.margin_top_mm).max(0.0);
        let last = layout.agency_lines.len().saturating_sub(1);

        let lines: Vec<String> = layout
            .agency_lines
            .iter()
            .enumerate()
            .map(|(i, line)| {
                if i == last {
                    format!("  #text(size: {}, weight: \"bold\", \"{}\")", size, escape_string(line))
                } else {
                    format!("  #text(size: {}, \"{}\")", size, escape_string(line))
                }
            })
            .collect();

        format!(
            "#v({})\n#align(center)[\n{}\n]\n",
            mm(offset),
            lines.join(" \\\n")
        )
    }

    fn transpile_rules(rules: &[Rule]) -> String {
        let mut output = String::new();
        for (i, rule) in rules.iter().enumerate() {
            output.push_str(if i == 0 { "#v(6pt)\n" } else { "#v(2pt)\n" });
            let fill = match rule {
                Rule::Solid { color, .. } => rgb(*color),
                Rule::Gradient { stops, .. } => format!(
                    "gradient.linear({})",
                    stops.iter().map(|c| rgb(*c)).collect::<Vec<_>>().join(", ")
                ),
            };
            output.push_str(&format!(
                "#rect(width: 100%, height: {}, fill: {}, stroke: none)\n",
                pt(rule.thickness_pt()),
                fill
            ));
        }
        output
    }

    fn transpile_letter(layout: &TransmittalLayout) -> String {
        let fonts = layout.fonts;
        let mut output = String::new();

        output.push_str("#v(18pt)\n");
        output.push_str(&format!(
            "#align(center, text(size: {}, weight: \"bold\", \"{}\"))\n",
            pt(fonts.heading_pt),
            escape_string(&layout.heading)
        ));
        output.push_str("#v(12pt)\n");
        output.push_str(&format!(
            "#align(right, text(\"{}\"))\n",
            escape_string(&layout.issued_on)
        ));
        output.push_str("#v(18pt)\n");
        output.push_str(&format!("#text(\"{}\")\n\n", escape_string(&layout.salutation)));

        output.push_str(&format!(
            "#par(justify: true, first-line-indent: {})[{}]\n",
            mm(INDENT_MM),
            Self::transpile_runs(&layout.body)
        ));

        output.push_str(&format!(
            "#block(width: 100%, stroke: 0.75pt, inset: 8pt, above: 12pt, below: 12pt, align(center, text(size: {}, weight: \"bold\", \"{}\")))\n",
            pt(fonts.title_box_pt),
            escape_string(&layout.title_box)
        ));

        for (i, line) in layout.closing.iter().enumerate() {
            if i == 0 {
                output.push_str(&format!("#text(\"{}\")\n\n", escape_string(line)));
            } else {
                output.push_str("#v(6pt)\n");
                output.push_str(&format!(
                    "#par(first-line-indent: {})[#text(\"{}\")]\n",
                    mm(INDENT_MM),
                    escape_string(line)
                ));
            }
        }

        output
    }

    /// Transpile styled runs, back to back
    fn transpile_runs(runs: &[StyledRun]) -> String {
        runs.iter().map(Self::transpile_run).collect()
    }

    fn transpile_run(run: &StyledRun) -> String {
        let text = escape_string(&run.text);
        match run.style {
            RunStyle::Plain => format!("#text(\"{}\")", text),
            RunStyle::Bold => format!("#text(weight: \"bold\", \"{}\")", text),
            RunStyle::Superscript { bold: false } => {
                format!("#super(typographic: false, \"{}\")", text)
            }
            RunStyle::Superscript { bold: true } => {
                format!(
                    "#super(typographic: false, text(weight: \"bold\", \"{}\"))",
                    text
                )
            }
        }
    }

    fn transpile_signatory(layout: &TransmittalLayout) -> String {
        let fonts = layout.fonts;
        let block = &layout.signatory;

        let mut lines = vec![format!(
            "  #text(size: {}, weight: \"bold\", \"{}\")",
            pt(fonts.signatory_name_pt),
            escape_string(&block.name)
        )];
        for line in block.titles.iter().chain(&block.authority) {
            lines.push(format!(
                "  #text(size: {}, \"{}\")",
                pt(fonts.signatory_title_pt),
                escape_string(line)
            ));
        }

        format!("#v(42pt)\n#align(center)[\n{}\n]\n", lines.join(" \\\n"))
    }

    fn transpile_table(table: &RecipientTable, layout: &TransmittalLayout) -> String {
        let size = pt(layout.fonts.table_pt);
        let caption_size = pt(layout.fonts.footer_pt);
        let mut output = String::new();

        output.push_str("#v(24pt)\n");
        output.push_str(&format!(
            "#table(\n  columns: ({}, 1fr, 1fr, 1fr),\n  stroke: none,\n  inset: (x: 4pt, y: 6pt),\n  align: bottom,\n",
            OFFICE_COLUMN
        ));

        match table {
            RecipientTable::Empty => {
                output.push_str(&format!(
                    "  table.cell(colspan: 4, align: center, text(size: {}, \"{}\")),\n",
                    size,
                    escape_string(NO_RECIPIENTS)
                ));
            }
            RecipientTable::Rows(rows) => {
                for row in rows {
                    output.push_str(&Self::transpile_table_row(row, &size, &caption_size));
                }
            }
        }

        output.push_str(")\n");
        output
    }

    /// Office cell followed by three blank signing lines
    fn transpile_table_row(row: &RecipientRow, size: &str, caption_size: &str) -> String {
        let mut office = format!(
            "#text(size: {}, weight: \"bold\", \"{}\")",
            size,
            escape_string(&row.office)
        );
        if let Some(address) = &row.address {
            office.push_str(&format!(
                " \\ #text(size: {}, \"{}\")",
                caption_size,
                escape_string(address)
            ));
        }

        let mut output = format!("  [{}],\n", office);
        for caption in SIGNING_CAPTIONS {
            output.push_str(&format!(
                "  [#v(18pt)#line(length: 100%, stroke: 0.5pt)#align(center, text(size: {}, \"{}\"))],\n",
                caption_size, caption
            ));
        }
        output
    }
}

/// Escape a string for use inside a Typst string literal
fn escape_string(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Millimeter length, at most two decimals
fn mm(value: f64) -> String {
    format!("{}mm", (value * 100.0).round() / 100.0)
}

/// Point length, at most two decimals
fn pt(value: f64) -> String {
    format!("{}pt", (value * 100.0).round() / 100.0)
}

fn rgb(color: Rgb) -> String {
    format!("rgb(\"#{}\")", color.hex())
}
