use clap::{App, Arg};

/// Representing the resulting command line arguments
pub struct Args {
    pub layout_path: String,
    pub output_path: Option<String>,
    pub config_path: Option<String>,
}

impl Args {
    /// Setup the clap app and parse the command line arguments
    pub fn parse() -> Self {
        let matches = App::new("pointcannon")
            .version("0.1")
            .about("Generates firing-arc safety ranges for every cannon on a ship grid")
            .arg(
                Arg::with_name("layout_path")
                    .required(true)
                    .help("Path to ship layout file"),
            )
            .arg(
                Arg::with_name("output_path")
                    .short("o")
                    .takes_value(true)
                    .help("Path to write computed ranges as JSON"),
            )
            .arg(
                Arg::with_name("config_path")
                    .short("c")
                    .takes_value(true)
                    .help("Path to config file"),
            )
            .get_matches();

        let layout_path = matches
            .value_of("layout_path")
            .expect("Layout path is not provided")
            .to_owned();

        let output_path = matches.value_of("output_path").map(|path| path.to_owned());
        let config_path = matches.value_of("config_path").map(|path| path.to_owned());

        Self {
            layout_path,
            output_path,
            config_path,
        }
    }
}
