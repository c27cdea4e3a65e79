//! Warped saw voice with MIDI parameter control.

use audio_midi_shell::{AudioGenerator, AudioMidiShell};
use simple_logger::SimpleLogger;

use logue_osc::fixed::{f32_to_q31, q31_to_f32, PARAM_MAX};
use logue_osc::oscillator::UserOscillator;
use logue_osc::params::UserOscParams;
use logue_osc::voice::WarpedSaw;

const SAMPLE_RATE: u32 = 48000;
const BLOCK_SIZE: usize = logue_osc::MAX_FRAMES;

/// First controller number, mapped to parameter 0.
const FIRST_CC: u8 = 21;

/// Period of the shape LFO in blocks.
const LFO_PERIOD: usize = 750;

fn main() -> ! {
    SimpleLogger::new()
        .with_level(log::LevelFilter::Debug)
        .init()
        .ok();

    AudioMidiShell::run_forever(SAMPLE_RATE, BLOCK_SIZE, App::new());
}

#[derive(Debug)]
struct App {
    voice: WarpedSaw,
    params: UserOscParams,
    gate: bool,
    lfo_block: usize,
    out: [i32; BLOCK_SIZE],
}

impl App {
    pub fn new() -> Self {
        Self {
            voice: WarpedSaw::new(),
            params: UserOscParams::with_note(48, 0),
            gate: false,
            lfo_block: 0,
            out: [0; BLOCK_SIZE],
        }
    }

    fn advance_lfo(&mut self) {
        self.lfo_block = (self.lfo_block + 1) % LFO_PERIOD;
        let phase = self.lfo_block as f32 / LFO_PERIOD as f32;
        let triangle = 1.0 - 4.0 * (phase - 0.5).abs();
        self.params.shape_lfo = f32_to_q31(triangle);
    }
}

impl AudioGenerator for App {
    fn init(&mut self, _block_size: usize) {
        self.voice.init(0, 0);
    }

    fn process(&mut self, samples_left: &mut [f32], samples_right: &mut [f32]) {
        self.advance_lfo();
        self.voice.process(&self.params, &mut self.out);

        let gain = if self.gate { 1.0 } else { 0.0 };
        for (frame, sample) in self.out.iter().enumerate() {
            let value = q31_to_f32(*sample) * gain;
            samples_left[frame] = value;
            samples_right[frame] = value;
        }
    }

    fn process_midi(&mut self, message: Vec<u8>) {
        match message[0] & 0xF0 {
            0x80 => {
                // Note off
                self.gate = false;
                self.voice.note_off(&self.params);
                log::info!("Note off: {}", message[1]);
            }
            0x90 if message[2] != 0 => {
                // Note on
                self.params.pitch = (message[1] as u16) << 8;
                self.gate = true;
                self.voice.note_on(&self.params);
                log::info!("Note on: {}", message[1]);
            }
            0xB0 => {
                // Control change
                let Some(index) = message[1].checked_sub(FIRST_CC).filter(|index| *index < 8)
                else {
                    return;
                };
                let value = (message[2] as u32 * PARAM_MAX as u32 / 127) as u16;
                self.voice.set_param(index as u16, value);
                log::info!("Param {}: {}", index, value);
            }
            _ => {}
        }
    }
}
