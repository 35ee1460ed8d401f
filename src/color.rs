use std::str::FromStr;

use lazy_static::lazy_static;
use palette::{named, Srgb};
use rand::Rng;
use tracing::debug;

use crate::{
    console::{InputSource, OutputSink},
    errors::ColorError,
    models::ColorReport,
};

/// Argument that switches to asking the user for a color
pub const ASK: &str = "ask";

static COLOR_NAMES: &[&str] = &[
    "aliceblue", "antiquewhite", "aqua", "aquamarine", "azure", "beige", "bisque", "black",
    "blanchedalmond", "blue", "blueviolet", "brown", "burlywood", "cadetblue", "chartreuse",
    "chocolate", "coral", "cornflowerblue", "cornsilk", "crimson", "cyan", "darkblue",
    "darkcyan", "darkgoldenrod", "darkgray", "darkgreen", "darkgrey", "darkkhaki",
    "darkmagenta", "darkolivegreen", "darkorange", "darkorchid", "darkred", "darksalmon",
    "darkseagreen", "darkslateblue", "darkslategray", "darkslategrey", "darkturquoise",
    "darkviolet", "deeppink", "deepskyblue", "dimgray", "dimgrey", "dodgerblue", "firebrick",
    "floralwhite", "forestgreen", "fuchsia", "gainsboro", "ghostwhite", "gold", "goldenrod",
    "gray", "green", "greenyellow", "grey", "honeydew", "hotpink", "indianred", "indigo",
    "ivory", "khaki", "lavender", "lavenderblush", "lawngreen", "lemonchiffon", "lightblue",
    "lightcoral", "lightcyan", "lightgoldenrodyellow", "lightgray", "lightgreen", "lightgrey",
    "lightpink", "lightsalmon", "lightseagreen", "lightskyblue", "lightslategray",
    "lightslategrey", "lightsteelblue", "lightyellow", "lime", "limegreen", "linen", "magenta",
    "maroon", "mediumaquamarine", "mediumblue", "mediumorchid", "mediumpurple",
    "mediumseagreen", "mediumslateblue", "mediumspringgreen", "mediumturquoise",
    "mediumvioletred", "midnightblue", "mintcream", "mistyrose", "moccasin", "navajowhite",
    "navy", "oldlace", "olive", "olivedrab", "orange", "orangered", "orchid", "palegoldenrod",
    "palegreen", "paleturquoise", "palevioletred", "papayawhip", "peachpuff", "peru", "pink",
    "plum", "powderblue", "purple", "red", "rosybrown", "royalblue",
    "saddlebrown", "salmon", "sandybrown", "seagreen", "seashell", "sienna", "silver",
    "skyblue", "slateblue", "slategray", "slategrey", "snow", "springgreen", "steelblue", "tan",
    "teal", "thistle", "tomato", "turquoise", "violet", "wheat", "white", "whitesmoke",
    "yellow", "yellowgreen",
];

lazy_static! {
    /// Known colors with their values, first name wins for aliases (aqua/cyan, gray/grey...)
    static ref KNOWN_COLORS: Vec<(&'static str, Srgb<u8>)> = COLOR_NAMES
        .iter()
        .filter_map(|name| named::from_str(name).map(|color| (*name, color)))
        .collect();
}

fn name_of(color: Srgb<u8>) -> Option<&'static str> {
    KNOWN_COLORS
        .iter()
        .find(|(_, known)| *known == color)
        .map(|(name, _)| *name)
}

fn report(color: Srgb<u8>, name: Option<&str>) -> ColorReport {
    ColorReport {
        hex: format!("#{:02X}{:02X}{:02X}", color.red, color.green, color.blue),
        red: color.red,
        green: color.green,
        blue: color.blue,
        name: name.map(str::to_string),
    }
}

/// Pick a uniformly random color
/// ### Returns
/// The color, named when it happens to match a known color exactly
pub fn random_color<R: Rng>(rng: &mut R) -> ColorReport {
    let color = Srgb::new(rng.gen::<u8>(), rng.gen::<u8>(), rng.gen::<u8>());
    report(color, name_of(color))
}

/// Resolve a user supplied color
/// ### Parameters
/// `hue`: A color name (any case) or a hex value
/// ### Errors
/// `ColorError::UnknownColor` for a valid hex value, only names are known colors\
/// `ColorError::Unparsable` for anything else
pub fn lookup(hue: &str) -> Result<ColorReport, ColorError> {
    let hue = hue.trim();
    let lowered = hue.to_lowercase();
    if let Some(color) = named::from_str(&lowered) {
        // Report the canonical name, `cyan` comes back as `aqua`
        return Ok(report(color, name_of(color).or(Some(lowered.as_str()))));
    }

    match Srgb::<u8>::from_str(hue) {
        Ok(_) => Err(ColorError::UnknownColor(hue.to_string())),
        Err(_) => Err(ColorError::Unparsable(hue.to_string())),
    }
}

/// The random color exercise, over the console seams
pub struct RandomColor<I, O> {
    input: I,
    output: O,
}

impl<I: InputSource, O: OutputSink> RandomColor<I, O> {
    pub fn new(input: I, output: O) -> Self {
        RandomColor { input, output }
    }

    /// Describe a random color, or the one named by `hue`
    /// ### Parameters
    /// `hue`: `None` for a random color, `ask` to prompt for one, otherwise the color itself
    /// ### Returns
    /// The described color, `None` when the user's color was missing or unknown
    pub fn execute<R: Rng>(
        &mut self,
        rng: &mut R,
        hue: Option<&str>,
    ) -> Result<Option<ColorReport>, ColorError> {
        let hue = match hue {
            None => {
                let color = random_color(rng);
                debug!(hex = %color.hex, "random color");
                self.output.write_line(&color.to_string())?;
                return Ok(Some(color));
            }
            Some(ASK) => match self.ask() {
                Ok(answer) => answer,
                Err(e) => return self.reject(e),
            },
            Some(hue) => hue.to_string(),
        };

        match lookup(&hue) {
            Ok(color) => {
                self.output.write_line(&color.to_string())?;
                Ok(Some(color))
            }
            Err(e) => self.reject(e),
        }
    }

    fn ask(&mut self) -> Result<String, ColorError> {
        self.output.write_line("What is your favorite color? ")?;
        match self.input.read_line()? {
            Some(answer) if !answer.trim().is_empty() => Ok(answer),
            _ => Err(ColorError::MissingColor),
        }
    }

    /// Tell the user what was wrong with their color, console failures are passed on
    fn reject(&mut self, error: ColorError) -> Result<Option<ColorReport>, ColorError> {
        if !error.is_user_error() {
            return Err(error);
        }
        debug!(%error, "color rejected");
        let message = match error {
            // Unparsable input gets the same answer as an unknown color
            ColorError::Unparsable(_) => ColorError::UnknownColor(String::new()).to_string(),
            other => other.to_string(),
        };
        self.output.write_line(&message)?;
        Ok(None)
    }
}
