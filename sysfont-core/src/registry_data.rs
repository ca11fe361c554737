//! Compiled-in font registry tables (made by FontLab https://www.fontlab.com/)

/// Known font files as `(basename, family, full name)`.
///
/// Collections list one row per face. Spellings of the same basename that
/// differ only in case collapse onto one registry key.
pub(crate) const FONTS: &[(&str, &str, &str)] = &[
    // Windows core fonts.
    ("arial.ttf", "Arial", "Arial"),
    ("arialbd.ttf", "Arial", "Arial Bold"),
    ("ariali.ttf", "Arial", "Arial Italic"),
    ("arialbi.ttf", "Arial", "Arial Bold Italic"),
    ("ariblk.ttf", "Arial Black", "Arial Black"),
    ("arialn.ttf", "Arial Narrow", "Arial Narrow"),
    ("arialnb.ttf", "Arial Narrow", "Arial Narrow Bold"),
    ("arialni.ttf", "Arial Narrow", "Arial Narrow Italic"),
    ("arialnbi.ttf", "Arial Narrow", "Arial Narrow Bold Italic"),
    ("times.ttf", "Times New Roman", "Times New Roman"),
    ("timesbd.ttf", "Times New Roman", "Times New Roman Bold"),
    ("timesi.ttf", "Times New Roman", "Times New Roman Italic"),
    ("timesbi.ttf", "Times New Roman", "Times New Roman Bold Italic"),
    ("cour.ttf", "Courier New", "Courier New"),
    ("courbd.ttf", "Courier New", "Courier New Bold"),
    ("couri.ttf", "Courier New", "Courier New Italic"),
    ("courbi.ttf", "Courier New", "Courier New Bold Italic"),
    ("verdana.ttf", "Verdana", "Verdana"),
    ("verdanab.ttf", "Verdana", "Verdana Bold"),
    ("verdanai.ttf", "Verdana", "Verdana Italic"),
    ("verdanaz.ttf", "Verdana", "Verdana Bold Italic"),
    ("georgia.ttf", "Georgia", "Georgia"),
    ("georgiab.ttf", "Georgia", "Georgia Bold"),
    ("georgiai.ttf", "Georgia", "Georgia Italic"),
    ("georgiaz.ttf", "Georgia", "Georgia Bold Italic"),
    ("tahoma.ttf", "Tahoma", "Tahoma"),
    ("tahomabd.ttf", "Tahoma", "Tahoma Bold"),
    ("trebuc.ttf", "Trebuchet MS", "Trebuchet MS"),
    ("trebucbd.ttf", "Trebuchet MS", "Trebuchet MS Bold"),
    ("trebucit.ttf", "Trebuchet MS", "Trebuchet MS Italic"),
    ("trebucbi.ttf", "Trebuchet MS", "Trebuchet MS Bold Italic"),
    ("comic.ttf", "Comic Sans MS", "Comic Sans MS"),
    ("comicbd.ttf", "Comic Sans MS", "Comic Sans MS Bold"),
    ("impact.ttf", "Impact", "Impact"),
    ("webdings.ttf", "Webdings", "Webdings"),
    ("wingding.ttf", "Wingdings", "Wingdings"),
    ("symbol.ttf", "Symbol", "Symbol"),
    ("calibri.ttf", "Calibri", "Calibri"),
    ("calibrib.ttf", "Calibri", "Calibri Bold"),
    ("calibrii.ttf", "Calibri", "Calibri Italic"),
    ("calibriz.ttf", "Calibri", "Calibri Bold Italic"),
    ("calibril.ttf", "Calibri", "Calibri Light"),
    ("cambria.ttc", "Cambria", "Cambria"),
    ("cambria.ttc", "Cambria Math", "Cambria Math"),
    ("cambriab.ttf", "Cambria", "Cambria Bold"),
    ("cambriai.ttf", "Cambria", "Cambria Italic"),
    ("cambriaz.ttf", "Cambria", "Cambria Bold Italic"),
    ("candara.ttf", "Candara", "Candara"),
    ("candarab.ttf", "Candara", "Candara Bold"),
    ("candarai.ttf", "Candara", "Candara Italic"),
    ("candaraz.ttf", "Candara", "Candara Bold Italic"),
    ("corbel.ttf", "Corbel", "Corbel"),
    ("corbelb.ttf", "Corbel", "Corbel Bold"),
    ("corbeli.ttf", "Corbel", "Corbel Italic"),
    ("corbelz.ttf", "Corbel", "Corbel Bold Italic"),
    ("consola.ttf", "Consolas", "Consolas"),
    ("consolab.ttf", "Consolas", "Consolas Bold"),
    ("consolai.ttf", "Consolas", "Consolas Italic"),
    ("consolaz.ttf", "Consolas", "Consolas Bold Italic"),
    ("segoeui.ttf", "Segoe UI", "Segoe UI"),
    ("segoeuib.ttf", "Segoe UI", "Segoe UI Bold"),
    ("segoeuii.ttf", "Segoe UI", "Segoe UI Italic"),
    ("segoeuiz.ttf", "Segoe UI", "Segoe UI Bold Italic"),
    ("pala.ttf", "Palatino Linotype", "Palatino Linotype"),
    ("palab.ttf", "Palatino Linotype", "Palatino Linotype Bold"),
    ("palai.ttf", "Palatino Linotype", "Palatino Linotype Italic"),
    ("palabi.ttf", "Palatino Linotype", "Palatino Linotype Bold Italic"),
    ("bkant.ttf", "Book Antiqua", "Book Antiqua"),
    ("bookos.ttf", "Bookman Old Style", "Bookman Old Style"),
    ("bookosb.ttf", "Bookman Old Style", "Bookman Old Style Bold"),
    ("bookosi.ttf", "Bookman Old Style", "Bookman Old Style Italic"),
    ("bookosbi.ttf", "Bookman Old Style", "Bookman Old Style Bold Italic"),
    ("century.ttf", "Century", "Century"),
    ("lucon.ttf", "Lucida Console", "Lucida Console"),
    ("l_10646.ttf", "Lucida Sans Unicode", "Lucida Sans Unicode"),
    ("micross.ttf", "Microsoft Sans Serif", "Microsoft Sans Serif"),
    // macOS.
    ("Arial.ttf", "Arial", "Arial"),
    ("Arial Bold.ttf", "Arial", "Arial Bold"),
    ("Arial Italic.ttf", "Arial", "Arial Italic"),
    ("Arial Bold Italic.ttf", "Arial", "Arial Bold Italic"),
    ("Arial Black.ttf", "Arial Black", "Arial Black"),
    ("Arial Narrow.ttf", "Arial Narrow", "Arial Narrow"),
    ("Times New Roman.ttf", "Times New Roman", "Times New Roman"),
    ("Times New Roman Bold.ttf", "Times New Roman", "Times New Roman Bold"),
    ("Times New Roman Italic.ttf", "Times New Roman", "Times New Roman Italic"),
    ("Times New Roman Bold Italic.ttf", "Times New Roman", "Times New Roman Bold Italic"),
    ("Courier New.ttf", "Courier New", "Courier New"),
    ("Courier New Bold.ttf", "Courier New", "Courier New Bold"),
    ("Courier New Italic.ttf", "Courier New", "Courier New Italic"),
    ("Courier New Bold Italic.ttf", "Courier New", "Courier New Bold Italic"),
    ("Verdana.ttf", "Verdana", "Verdana"),
    ("Verdana Bold.ttf", "Verdana", "Verdana Bold"),
    ("Verdana Italic.ttf", "Verdana", "Verdana Italic"),
    ("Verdana Bold Italic.ttf", "Verdana", "Verdana Bold Italic"),
    ("Georgia.ttf", "Georgia", "Georgia"),
    ("Tahoma.ttf", "Tahoma", "Tahoma"),
    ("Trebuchet MS.ttf", "Trebuchet MS", "Trebuchet MS"),
    ("Comic Sans MS.ttf", "Comic Sans MS", "Comic Sans MS"),
    ("Impact.ttf", "Impact", "Impact"),
    ("Webdings.ttf", "Webdings", "Webdings"),
    ("Wingdings.ttf", "Wingdings", "Wingdings"),
    ("Symbol.ttf", "Symbol", "Symbol"),
    ("Andale Mono.ttf", "Andale Mono", "Andale Mono"),
    ("Helvetica.ttc", "Helvetica", "Helvetica"),
    ("Helvetica.ttc", "Helvetica", "Helvetica Bold"),
    ("Helvetica.ttc", "Helvetica", "Helvetica Oblique"),
    ("Helvetica.ttc", "Helvetica", "Helvetica Bold Oblique"),
    ("Helvetica.ttc", "Helvetica", "Helvetica Light"),
    ("Helvetica.ttc", "Helvetica", "Helvetica Light Oblique"),
    ("HelveticaNeue.ttc", "Helvetica Neue", "Helvetica Neue"),
    ("HelveticaNeue.ttc", "Helvetica Neue", "Helvetica Neue Bold"),
    ("HelveticaNeue.ttc", "Helvetica Neue", "Helvetica Neue Italic"),
    ("HelveticaNeue.ttc", "Helvetica Neue", "Helvetica Neue Bold Italic"),
    ("HelveticaNeue.ttc", "Helvetica Neue", "Helvetica Neue Light"),
    ("HelveticaNeue.ttc", "Helvetica Neue", "Helvetica Neue Medium"),
    ("HelveticaNeue.ttc", "Helvetica Neue", "Helvetica Neue Condensed Bold"),
    ("Times.ttc", "Times", "Times Roman"),
    ("Times.ttc", "Times", "Times Bold"),
    ("Times.ttc", "Times", "Times Italic"),
    ("Times.ttc", "Times", "Times Bold Italic"),
    ("Courier.ttc", "Courier", "Courier"),
    ("Courier.ttc", "Courier", "Courier Bold"),
    ("Courier.ttc", "Courier", "Courier Oblique"),
    ("Courier.ttc", "Courier", "Courier Bold Oblique"),
    ("Menlo.ttc", "Menlo", "Menlo Regular"),
    ("Menlo.ttc", "Menlo", "Menlo Bold"),
    ("Menlo.ttc", "Menlo", "Menlo Italic"),
    ("Menlo.ttc", "Menlo", "Menlo Bold Italic"),
    ("Monaco.ttf", "Monaco", "Monaco"),
    ("Geneva.ttf", "Geneva", "Geneva"),
    ("Palatino.ttc", "Palatino", "Palatino"),
    ("Palatino.ttc", "Palatino", "Palatino Bold"),
    ("Palatino.ttc", "Palatino", "Palatino Italic"),
    ("Palatino.ttc", "Palatino", "Palatino Bold Italic"),
    ("Baskerville.ttc", "Baskerville", "Baskerville"),
    ("Baskerville.ttc", "Baskerville", "Baskerville Bold"),
    ("Baskerville.ttc", "Baskerville", "Baskerville Italic"),
    ("Baskerville.ttc", "Baskerville", "Baskerville Bold Italic"),
    ("Baskerville.ttc", "Baskerville", "Baskerville SemiBold"),
    ("Baskerville.ttc", "Baskerville", "Baskerville SemiBold Italic"),
    ("AmericanTypewriter.ttc", "American Typewriter", "American Typewriter"),
    ("AmericanTypewriter.ttc", "American Typewriter", "American Typewriter Bold"),
    ("AmericanTypewriter.ttc", "American Typewriter", "American Typewriter Light"),
    ("AmericanTypewriter.ttc", "American Typewriter", "American Typewriter Semibold"),
    ("AmericanTypewriter.ttc", "American Typewriter", "American Typewriter Condensed"),
    ("AmericanTypewriter.ttc", "American Typewriter", "American Typewriter Condensed Bold"),
    ("GillSans.ttc", "Gill Sans", "Gill Sans"),
    ("GillSans.ttc", "Gill Sans", "Gill Sans Bold"),
    ("GillSans.ttc", "Gill Sans", "Gill Sans Italic"),
    ("GillSans.ttc", "Gill Sans", "Gill Sans Bold Italic"),
    ("GillSans.ttc", "Gill Sans", "Gill Sans Light"),
    ("Hoefler Text.ttc", "Hoefler Text", "Hoefler Text"),
    ("Hoefler Text.ttc", "Hoefler Text", "Hoefler Text Italic"),
    ("Hoefler Text.ttc", "Hoefler Text", "Hoefler Text Black"),
    ("Hoefler Text.ttc", "Hoefler Text", "Hoefler Text Black Italic"),
    ("Futura.ttc", "Futura", "Futura Medium"),
    ("Futura.ttc", "Futura", "Futura Medium Italic"),
    ("Futura.ttc", "Futura", "Futura Bold"),
    ("Futura.ttc", "Futura", "Futura Condensed Medium"),
    ("Optima.ttc", "Optima", "Optima Regular"),
    ("Optima.ttc", "Optima", "Optima Bold"),
    ("Optima.ttc", "Optima", "Optima Italic"),
    ("Optima.ttc", "Optima", "Optima Bold Italic"),
    ("ZapfDingbats.ttf", "Zapf Dingbats", "Zapf Dingbats"),
    // Linux and free fonts.
    ("dingbats.ttc", "Dingbats", "Dingbats"),
    ("DejaVuSans.ttf", "DejaVu Sans", "DejaVu Sans"),
    ("DejaVuSans-Bold.ttf", "DejaVu Sans", "DejaVu Sans Bold"),
    ("DejaVuSans-Oblique.ttf", "DejaVu Sans", "DejaVu Sans Oblique"),
    ("DejaVuSans-BoldOblique.ttf", "DejaVu Sans", "DejaVu Sans Bold Oblique"),
    ("DejaVuSerif.ttf", "DejaVu Serif", "DejaVu Serif"),
    ("DejaVuSerif-Bold.ttf", "DejaVu Serif", "DejaVu Serif Bold"),
    ("DejaVuSerif-Italic.ttf", "DejaVu Serif", "DejaVu Serif Italic"),
    ("DejaVuSerif-BoldItalic.ttf", "DejaVu Serif", "DejaVu Serif Bold Italic"),
    ("DejaVuSansMono.ttf", "DejaVu Sans Mono", "DejaVu Sans Mono"),
    ("DejaVuSansMono-Bold.ttf", "DejaVu Sans Mono", "DejaVu Sans Mono Bold"),
    ("DejaVuSansMono-Oblique.ttf", "DejaVu Sans Mono", "DejaVu Sans Mono Oblique"),
    ("DejaVuSansMono-BoldOblique.ttf", "DejaVu Sans Mono", "DejaVu Sans Mono Bold Oblique"),
    ("LiberationSans-Regular.ttf", "Liberation Sans", "Liberation Sans"),
    ("LiberationSans-Bold.ttf", "Liberation Sans", "Liberation Sans Bold"),
    ("LiberationSans-Italic.ttf", "Liberation Sans", "Liberation Sans Italic"),
    ("LiberationSans-BoldItalic.ttf", "Liberation Sans", "Liberation Sans Bold Italic"),
    ("LiberationSerif-Regular.ttf", "Liberation Serif", "Liberation Serif"),
    ("LiberationSerif-Bold.ttf", "Liberation Serif", "Liberation Serif Bold"),
    ("LiberationSerif-Italic.ttf", "Liberation Serif", "Liberation Serif Italic"),
    ("LiberationSerif-BoldItalic.ttf", "Liberation Serif", "Liberation Serif Bold Italic"),
    ("LiberationMono-Regular.ttf", "Liberation Mono", "Liberation Mono"),
    ("LiberationMono-Bold.ttf", "Liberation Mono", "Liberation Mono Bold"),
    ("LiberationMono-Italic.ttf", "Liberation Mono", "Liberation Mono Italic"),
    ("LiberationMono-BoldItalic.ttf", "Liberation Mono", "Liberation Mono Bold Italic"),
    ("Arimo-Regular.ttf", "Arimo", "Arimo"),
    ("Arimo-Bold.ttf", "Arimo", "Arimo Bold"),
    ("Arimo-Italic.ttf", "Arimo", "Arimo Italic"),
    ("Arimo-BoldItalic.ttf", "Arimo", "Arimo Bold Italic"),
    ("Tinos-Regular.ttf", "Tinos", "Tinos"),
    ("Tinos-Bold.ttf", "Tinos", "Tinos Bold"),
    ("Tinos-Italic.ttf", "Tinos", "Tinos Italic"),
    ("Tinos-BoldItalic.ttf", "Tinos", "Tinos Bold Italic"),
    ("Cousine-Regular.ttf", "Cousine", "Cousine"),
    ("Cousine-Bold.ttf", "Cousine", "Cousine Bold"),
    ("Cousine-Italic.ttf", "Cousine", "Cousine Italic"),
    ("Cousine-BoldItalic.ttf", "Cousine", "Cousine Bold Italic"),
    ("Carlito-Regular.ttf", "Carlito", "Carlito"),
    ("Carlito-Bold.ttf", "Carlito", "Carlito Bold"),
    ("Carlito-Italic.ttf", "Carlito", "Carlito Italic"),
    ("Carlito-BoldItalic.ttf", "Carlito", "Carlito Bold Italic"),
    ("Caladea-Regular.ttf", "Caladea", "Caladea"),
    ("Caladea-Bold.ttf", "Caladea", "Caladea Bold"),
    ("Caladea-Italic.ttf", "Caladea", "Caladea Italic"),
    ("Caladea-BoldItalic.ttf", "Caladea", "Caladea Bold Italic"),
    ("NimbusSans-Regular.otf", "Nimbus Sans", "Nimbus Sans Regular"),
    ("NimbusSans-Bold.otf", "Nimbus Sans", "Nimbus Sans Bold"),
    ("NimbusSans-Italic.otf", "Nimbus Sans", "Nimbus Sans Italic"),
    ("NimbusSans-BoldItalic.otf", "Nimbus Sans", "Nimbus Sans Bold Italic"),
    ("NimbusRoman-Regular.otf", "Nimbus Roman", "Nimbus Roman Regular"),
    ("NimbusRoman-Bold.otf", "Nimbus Roman", "Nimbus Roman Bold"),
    ("NimbusRoman-Italic.otf", "Nimbus Roman", "Nimbus Roman Italic"),
    ("NimbusRoman-BoldItalic.otf", "Nimbus Roman", "Nimbus Roman Bold Italic"),
    ("NimbusMonoPS-Regular.otf", "Nimbus Mono PS", "Nimbus Mono PS Regular"),
    ("NimbusMonoPS-Bold.otf", "Nimbus Mono PS", "Nimbus Mono PS Bold"),
    ("NimbusMonoPS-Italic.otf", "Nimbus Mono PS", "Nimbus Mono PS Italic"),
    ("NimbusMonoPS-BoldItalic.otf", "Nimbus Mono PS", "Nimbus Mono PS Bold Italic"),
    ("StandardSymbolsPS.otf", "Standard Symbols PS", "Standard Symbols PS"),
    ("D050000L.otf", "D050000L", "D050000L"),
    ("P052-Roman.otf", "P052", "P052 Roman"),
    ("P052-Bold.otf", "P052", "P052 Bold"),
    ("P052-Italic.otf", "P052", "P052 Italic"),
    ("P052-BoldItalic.otf", "P052", "P052 Bold Italic"),
    ("C059-Roman.otf", "C059", "C059 Roman"),
    ("C059-Bold.otf", "C059", "C059 Bold"),
    ("C059-Italic.otf", "C059", "C059 Italic"),
    ("C059-BdIta.otf", "C059", "C059 Bold Italic"),
    ("URWBookman-Light.otf", "URW Bookman", "URW Bookman Light"),
    ("URWBookman-Demi.otf", "URW Bookman", "URW Bookman Demi"),
    ("URWGothic-Book.otf", "URW Gothic", "URW Gothic Book"),
    ("URWGothic-Demi.otf", "URW Gothic", "URW Gothic Demi"),
    ("FreeSans.ttf", "FreeSans", "FreeSans"),
    ("FreeSansBold.ttf", "FreeSans", "FreeSans Bold"),
    ("FreeSansOblique.ttf", "FreeSans", "FreeSans Oblique"),
    ("FreeSerif.ttf", "FreeSerif", "FreeSerif"),
    ("FreeSerifBold.ttf", "FreeSerif", "FreeSerif Bold"),
    ("FreeSerifItalic.ttf", "FreeSerif", "FreeSerif Italic"),
    ("FreeMono.ttf", "FreeMono", "FreeMono"),
    ("FreeMonoBold.ttf", "FreeMono", "FreeMono Bold"),
    ("FreeMonoOblique.ttf", "FreeMono", "FreeMono Oblique"),
    ("texgyreheros-regular.otf", "TeX Gyre Heros", "TeX Gyre Heros Regular"),
    ("texgyreheros-bold.otf", "TeX Gyre Heros", "TeX Gyre Heros Bold"),
    ("texgyretermes-regular.otf", "TeX Gyre Termes", "TeX Gyre Termes Regular"),
    ("texgyretermes-bold.otf", "TeX Gyre Termes", "TeX Gyre Termes Bold"),
    ("texgyrecursor-regular.otf", "TeX Gyre Cursor", "TeX Gyre Cursor Regular"),
    ("texgyrecursor-bold.otf", "TeX Gyre Cursor", "TeX Gyre Cursor Bold"),
    ("texgyrepagella-regular.otf", "TeX Gyre Pagella", "TeX Gyre Pagella Regular"),
    ("texgyrebonum-regular.otf", "TeX Gyre Bonum", "TeX Gyre Bonum Regular"),
    ("texgyreschola-regular.otf", "TeX Gyre Schola", "TeX Gyre Schola Regular"),
    ("texgyreadventor-regular.otf", "TeX Gyre Adventor", "TeX Gyre Adventor Regular"),
    ("NotoSans-Regular.ttf", "Noto Sans", "Noto Sans Regular"),
    ("NotoSans-Bold.ttf", "Noto Sans", "Noto Sans Bold"),
    ("NotoSans-Italic.ttf", "Noto Sans", "Noto Sans Italic"),
    ("NotoSerif-Regular.ttf", "Noto Serif", "Noto Serif Regular"),
    ("NotoSerif-Bold.ttf", "Noto Serif", "Noto Serif Bold"),
    ("NotoSansMono-Regular.ttf", "Noto Sans Mono", "Noto Sans Mono Regular"),
    ("Ubuntu-R.ttf", "Ubuntu", "Ubuntu"),
    ("Ubuntu-B.ttf", "Ubuntu", "Ubuntu Bold"),
    ("Ubuntu-RI.ttf", "Ubuntu", "Ubuntu Italic"),
    ("UbuntuMono-R.ttf", "Ubuntu Mono", "Ubuntu Mono"),
    ("UbuntuMono-B.ttf", "Ubuntu Mono", "Ubuntu Mono Bold"),
    ("Cantarell-Regular.otf", "Cantarell", "Cantarell Regular"),
    ("Cantarell-Bold.otf", "Cantarell", "Cantarell Bold"),
];

/// Families that can stand in for one another, mostly by matching metrics.
pub(crate) const ALTERNATIVES: &[&[&str]] = &[
    &[
        "Arial",
        "Helvetica",
        "Helvetica Neue",
        "Liberation Sans",
        "Arimo",
        "Nimbus Sans",
        "FreeSans",
        "TeX Gyre Heros",
    ],
    &[
        "Times New Roman",
        "Times",
        "Liberation Serif",
        "Tinos",
        "Nimbus Roman",
        "FreeSerif",
        "TeX Gyre Termes",
    ],
    &[
        "Courier New",
        "Courier",
        "Liberation Mono",
        "Cousine",
        "Nimbus Mono PS",
        "FreeMono",
        "TeX Gyre Cursor",
    ],
    &["Calibri", "Carlito"],
    &["Cambria", "Caladea"],
    &["Symbol", "Standard Symbols PS"],
    &["Zapf Dingbats", "Dingbats", "D050000L"],
    &[
        "Palatino",
        "Palatino Linotype",
        "Book Antiqua",
        "P052",
        "TeX Gyre Pagella",
    ],
    &["Bookman Old Style", "URW Bookman", "TeX Gyre Bonum"],
    &["Century", "C059", "TeX Gyre Schola"],
    &["URW Gothic", "TeX Gyre Adventor"],
    &["Verdana", "DejaVu Sans", "Noto Sans"],
    &["Georgia", "DejaVu Serif", "Noto Serif"],
    &[
        "Consolas",
        "Menlo",
        "Monaco",
        "Andale Mono",
        "Lucida Console",
        "DejaVu Sans Mono",
        "Noto Sans Mono",
        "Ubuntu Mono",
    ],
];

/// Families tried when a query belongs to no alternative group.
pub(crate) const DEFAULTS: &[&str] = &[
    "Arial",
    "Helvetica",
    "Liberation Sans",
    "Arimo",
    "Nimbus Sans",
    "DejaVu Sans",
    "Noto Sans",
    "FreeSans",
    "Times New Roman",
    "Times",
    "Liberation Serif",
    "DejaVu Serif",
];
