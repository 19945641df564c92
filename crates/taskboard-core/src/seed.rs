//! The built-in demo dataset: a small VR course project plan.

use chrono::NaiveDate;

use crate::task::{NewTask, Priority, Status};

use Priority::{High, Low, Medium};
use Status::{Done, InProgress, New};

/// (title, description, assignee, priority, due date, status)
type Row = (&'static str, &'static str, &'static str, Priority, (i32, u32, u32), Status);

const VR_PROJECT: [Row; 18] = [
  (
    "Изучение актуальных тем для разработки проекта в виртуальной реальности",
    "Изучение современных тенденций и технологий в VR разработке",
    "Георгий", High, (2025, 9, 10), Done,
  ),
  (
    "Выбор и формулирование темы проекта в виртуальной реальности",
    "Определение конкретной темы и направленности VR проекта",
    "Артём", Medium, (2025, 9, 15), Done,
  ),
  (
    "Составление плана выполнения проекта с ключевыми дедлайнами",
    "Создание детального плана разработки с этапами и сроками",
    "Василий", High, (2025, 9, 20), Done,
  ),
  (
    "Формулировка цели и задач проекта",
    "Определение основных целей и конкретных задач VR проекта",
    "Георгий", Low, (2025, 9, 25), Done,
  ),
  (
    "Формирование списка используемых источников",
    "Сбор и систематизация библиографических источников",
    "Георгий", Low, (2025, 9, 25), Done,
  ),
  (
    "Разработка идеи проекта с реализацией механик в виртуальной реальности",
    "Проектирование основных механик и геймплейных элементов",
    "Артём", High, (2025, 10, 1), Done,
  ),
  (
    "Продумывание и визуализация итогового результата",
    "Создание концепт-артов и визуального представления проекта",
    "Василий", Medium, (2025, 10, 10), Done,
  ),
  (
    "Разработка 3D-моделей для проекта",
    "Создание трехмерных моделей объектов и окружения для VR",
    "Василий", High, (2025, 11, 20), InProgress,
  ),
  (
    "Разработка механик, программирование",
    "Программирование основных игровых механик и взаимодействий",
    "Георгий", High, (2025, 11, 20), InProgress,
  ),
  (
    "Сборка проекта",
    "Интеграция всех компонентов в единый VR проект",
    "Артём", High, (2025, 11, 20), InProgress,
  ),
  (
    "Тестирование работы механик со шлемом виртуальной реальности",
    "Проверка функциональности и удобства использования в VR",
    "Георгий", Medium, (2025, 11, 25), New,
  ),
  (
    "Тестирование работы механик со шлемом виртуальной реальности",
    "Проверка функциональности и удобства использования в VR",
    "Артём", Medium, (2025, 11, 25), New,
  ),
  (
    "Написание текста проекта",
    "Подготовка документации и описания проекта",
    "Василий", Low, (2025, 12, 1), New,
  ),
  (
    "Запись видео с демонстрацией механик",
    "Создание демонстрационного ролика работы VR приложения",
    "Артём", High, (2025, 12, 10), New,
  ),
  (
    "Подготовка презентации проекта",
    "Разработка презентационных материалов для защиты",
    "Георгий", Medium, (2025, 12, 10), New,
  ),
  (
    "Защита проекта",
    "Презентация и защита готового VR проекта",
    "Георгий", High, (2025, 12, 15), New,
  ),
  (
    "Защита проекта",
    "Презентация и защита готового VR проекта",
    "Артём", High, (2025, 12, 15), New,
  ),
  (
    "Защита проекта",
    "Презентация и защита готового VR проекта",
    "Василий", High, (2025, 12, 15), New,
  ),
];

/// The fixed demo dataset, in insertion order, with explicit statuses.
pub fn demo_dataset() -> Vec<NewTask> {
  VR_PROJECT
    .iter()
    .map(|&(title, description, assignee, priority, (y, m, d), status)| NewTask {
      description: description.to_owned(),
      assignee: assignee.to_owned(),
      due_date: NaiveDate::from_ymd_opt(y, m, d),
      status,
      ..NewTask::new(title, priority)
    })
    .collect()
}
