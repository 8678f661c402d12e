mod audio_config;
mod behaviour_config;
#[allow(clippy::module_inception)]
mod config;
mod location_config;
mod video_config;

pub(crate) use {
    audio_config::AudioConfig, behaviour_config::BehaviourConfig, config::Config,
    config::log_dir, location_config::LocationConfig, video_config::VideoConfig,
};

pub(crate) const DEFAULT_FFMPEG_PATH: &str = "ffmpeg";

pub(crate) fn default_ffmpeg_path() -> String {
    DEFAULT_FFMPEG_PATH.to_string()
}

pub(crate) fn default_video_device() -> String {
    #[cfg(target_os = "macos")]
    {
        "0:0".to_string()
    }
    #[cfg(not(target_os = "macos"))]
    {
        "/dev/video0".to_string()
    }
}

pub(crate) fn default_high_accuracy() -> bool {
    true
}

pub(crate) fn default_show_key_hints() -> bool {
    true
}
