use super::constants::watts_to_kj_per_day;
use crate::params::RoomParameters;

/// 벽체/천장/바닥 전도 부하 [kJ/24Hr]와 전열면적 [m²].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransmissionLoads {
    pub wall_area: f64,
    pub ceiling_area: f64,
    pub floor_area: f64,
    pub wall_load: f64,
    pub ceiling_load: f64,
    pub floor_load: f64,
    pub total: f64,
}

/// 한 면의 전도 부하. `A × U × ΔT` [W]를 하루 적산 kJ로 바꾼다.
pub fn surface_load(area_m2: f64, u_w_m2k: f64, delta_t_k: f64) -> f64 {
    watts_to_kj_per_day(area_m2 * u_w_m2k * delta_t_k)
}

/// 벽과 천장은 외기, 바닥은 지면 온도 기준으로 온도차를 잡는다.
pub fn transmission_loads(room: &RoomParameters) -> TransmissionLoads {
    let air_dt = room.ambient_temperature - room.room_temperature;
    let ground_dt = room.ground_temperature - room.room_temperature;

    let wall_area = room.wall_area();
    let ceiling_area = room.ceiling_area();
    let floor_area = room.floor_area();

    let wall_load = surface_load(wall_area, room.wall_u_factor, air_dt);
    let ceiling_load = surface_load(ceiling_area, room.ceiling_u_factor, air_dt);
    let floor_load = surface_load(floor_area, room.floor_u_factor, ground_dt);

    TransmissionLoads {
        wall_area,
        ceiling_area,
        floor_area,
        wall_load,
        ceiling_load,
        floor_load,
        total: wall_load + ceiling_load + floor_load,
    }
}
