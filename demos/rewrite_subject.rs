use mime_header::{Charset, Header, HeaderCfg};
use tracing::info;

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    let cfg = HeaderCfg::default();
    let line = b"Subject: =?iso-8859-1?q?R=E9union?= du lundi\r\n";

    let Some(mut subject) = Header::try_parse(&cfg, line, Some(0)) else {
        eprintln!("not a header line");
        return;
    };
    info!(offset = ?subject.offset(), "parsed {}", subject);

    subject.subscribe(|h: &Header| info!("changed to {:?}", h.value()));
    subject.set_value(
        Charset::Utf8,
        "R\u{e9}union du lundi, d\u{e9}plac\u{e9}e au mardi \u{e0} 14h en salle 3",
    );

    info!(offset = ?subject.offset(), "rewritten {}", subject);
    print!("{}:", subject.field());
    print!("{}", String::from_utf8_lossy(subject.raw_value()));
}
