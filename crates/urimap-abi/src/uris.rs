//! Well-known URIs resolved by hosts at startup.
//!
//! Grouped by the vocabulary that defines them. The `automate` and
//! `surround` groups are host extensions that only some plugins understand.

/// `http://lv2plug.in/ns/ext/atom#`
pub mod atom {
    use core::ffi::CStr;

    /// `atom:Chunk`
    pub const CHUNK: &CStr = c"http://lv2plug.in/ns/ext/atom#Chunk";
    /// `atom:Path`
    pub const PATH: &CStr = c"http://lv2plug.in/ns/ext/atom#Path";
    /// `atom:Sequence`
    pub const SEQUENCE: &CStr = c"http://lv2plug.in/ns/ext/atom#Sequence";
    /// `atom:eventTransfer`
    pub const EVENT_TRANSFER: &CStr = c"http://lv2plug.in/ns/ext/atom#eventTransfer";
    /// `atom:URID`
    pub const URID: &CStr = c"http://lv2plug.in/ns/ext/atom#URID";
    /// `atom:Blank`
    pub const BLANK: &CStr = c"http://lv2plug.in/ns/ext/atom#Blank";
    /// `atom:Object`
    pub const OBJECT: &CStr = c"http://lv2plug.in/ns/ext/atom#Object";
    /// `atom:Double`
    pub const DOUBLE: &CStr = c"http://lv2plug.in/ns/ext/atom#Double";
    /// `atom:Float`
    pub const FLOAT: &CStr = c"http://lv2plug.in/ns/ext/atom#Float";
    /// `atom:Long`
    pub const LONG: &CStr = c"http://lv2plug.in/ns/ext/atom#Long";
    /// `atom:Int`
    pub const INT: &CStr = c"http://lv2plug.in/ns/ext/atom#Int";
}

/// `http://lv2plug.in/ns/ext/log#`
pub mod log {
    use core::ffi::CStr;

    /// `log:Error`
    pub const ERROR: &CStr = c"http://lv2plug.in/ns/ext/log#Error";
    /// `log:Note`
    pub const NOTE: &CStr = c"http://lv2plug.in/ns/ext/log#Note";
    /// `log:Trace`
    pub const TRACE: &CStr = c"http://lv2plug.in/ns/ext/log#Trace";
    /// `log:Warning`
    pub const WARNING: &CStr = c"http://lv2plug.in/ns/ext/log#Warning";
}

/// `http://lv2plug.in/ns/ext/midi#`
pub mod midi {
    use core::ffi::CStr;

    /// `midi:MidiEvent`
    pub const MIDI_EVENT: &CStr = c"http://lv2plug.in/ns/ext/midi#MidiEvent";
}

/// `http://lv2plug.in/ns/ext/time#`
pub mod time {
    use core::ffi::CStr;

    /// `time:Position`
    pub const POSITION: &CStr = c"http://lv2plug.in/ns/ext/time#Position";
    /// `time:bar`
    pub const BAR: &CStr = c"http://lv2plug.in/ns/ext/time#bar";
    /// `time:barBeat`
    pub const BAR_BEAT: &CStr = c"http://lv2plug.in/ns/ext/time#barBeat";
    /// `time:beatUnit`
    pub const BEAT_UNIT: &CStr = c"http://lv2plug.in/ns/ext/time#beatUnit";
    /// `time:beatsPerBar`
    pub const BEATS_PER_BAR: &CStr = c"http://lv2plug.in/ns/ext/time#beatsPerBar";
    /// `time:beatsPerMinute`
    pub const BEATS_PER_MINUTE: &CStr = c"http://lv2plug.in/ns/ext/time#beatsPerMinute";
    /// `time:frame`
    pub const FRAME: &CStr = c"http://lv2plug.in/ns/ext/time#frame";
    /// `time:speed`
    pub const SPEED: &CStr = c"http://lv2plug.in/ns/ext/time#speed";
    /// `time:scale`
    pub const SCALE: &CStr = c"http://lv2plug.in/ns/ext/time#scale";
}

/// `http://lv2plug.in/ns/ext/patch#`
pub mod patch {
    use core::ffi::CStr;

    /// `patch:Get`
    pub const GET: &CStr = c"http://lv2plug.in/ns/ext/patch#Get";
    /// `patch:Set`
    pub const SET: &CStr = c"http://lv2plug.in/ns/ext/patch#Set";
    /// `patch:property`
    pub const PROPERTY: &CStr = c"http://lv2plug.in/ns/ext/patch#property";
    /// `patch:value`
    pub const VALUE: &CStr = c"http://lv2plug.in/ns/ext/patch#value";
}

/// `http://lv2plug.in/ns/ext/state#`
pub mod state {
    use core::ffi::CStr;

    /// `state:StateChanged`
    pub const STATE_CHANGED: &CStr = c"http://lv2plug.in/ns/ext/state#StateChanged";
}

/// `http://ardour.org/lv2/automate#`
pub mod automate {
    use core::ffi::CStr;

    /// Automation event
    pub const EVENT: &CStr = c"http://ardour.org/lv2/automate#event";
    /// Automation setup
    pub const SETUP: &CStr = c"http://ardour.org/lv2/automate#setup";
    /// Automation finalize
    pub const FINALIZE: &CStr = c"http://ardour.org/lv2/automate#finalize";
    /// Automation start
    pub const START: &CStr = c"http://ardour.org/lv2/automate#start";
    /// Automation end
    pub const END: &CStr = c"http://ardour.org/lv2/automate#end";
    /// Automated parameter
    pub const PARAMETER: &CStr = c"http://ardour.org/lv2/automate#parameter";
    /// Automated value
    pub const VALUE: &CStr = c"http://ardour.org/lv2/automate#value";
}

/// `http://ardour.org/lv2/surround#`
pub mod surround {
    use core::ffi::CStr;

    /// Surround metadata object
    pub const META_DATA: &CStr = c"http://ardour.org/lv2/surround#MetaData";
    /// Channel index
    pub const CHANNEL: &CStr = c"http://ardour.org/lv2/surround#Channel";
    /// X position
    pub const POS_X: &CStr = c"http://ardour.org/lv2/surround#PosX";
    /// Y position
    pub const POS_Y: &CStr = c"http://ardour.org/lv2/surround#PosY";
    /// Z position
    pub const POS_Z: &CStr = c"http://ardour.org/lv2/surround#PosZ";
    /// Object size
    pub const SIZE: &CStr = c"http://ardour.org/lv2/surround#Size";
    /// Snap to speaker
    pub const SNAP: &CStr = c"http://ardour.org/lv2/surround#Snap";
    /// Renderer settings
    pub const SETTINGS: &CStr = c"http://ardour.org/lv2/surround#Settings";
    /// Binaural render mode
    pub const BINAURAL_RENDER_MODE: &CStr = c"http://ardour.org/lv2/surround#BinauralRenderMode";
    /// Channel count
    pub const CHANNEL_COUNT: &CStr = c"http://ardour.org/lv2/surround#ChannelCount";
    /// Downmix mode
    pub const DOWNMIX_MODE: &CStr = c"http://ardour.org/lv2/surround#DownmixMode";
    /// Warp mode
    pub const WARP_MODE: &CStr = c"http://ardour.org/lv2/surround#WarpMode";
    /// Export start marker
    pub const EXPORT_START: &CStr = c"http://ardour.org/lv2/surround#ExportStart";
    /// Export stop marker
    pub const EXPORT_STOP: &CStr = c"http://ardour.org/lv2/surround#ExportStop";
}
